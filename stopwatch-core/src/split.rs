//! Split (lap) records.

use crate::format::hms_cs;

/// One recorded checkpoint: cumulative time and the lap since the previous
/// checkpoint, with both labels formatted at creation time. Entries are
/// never modified after they are appended.
#[derive(Clone, Debug)]
pub struct Split {
    /// Unique within a session (monotonically increasing from 1).
    pub id: u32,
    /// Cumulative elapsed time, formatted.
    pub total_label: String,
    /// Time since the previous split in milliseconds.
    pub lap_ms: u64,
    /// Lap duration, formatted.
    pub lap_label: String,
}

/// Insertion-ordered, append-only sequence of splits.
pub struct SplitLog {
    splits: Vec<Split>,
    last_boundary_ms: u64,
    next_id: u32,
}

impl SplitLog {
    pub fn new() -> Self {
        Self {
            splits: Vec::new(),
            last_boundary_ms: 0,
            next_id: 1,
        }
    }

    /// Append a split at the given cumulative elapsed time.
    ///
    /// The lap duration is measured from the previous split boundary
    /// (session start if none). The caller is responsible for only
    /// recording while the stopwatch runs.
    pub fn record(&mut self, elapsed_ms: u64) -> &Split {
        let lap_ms = elapsed_ms.saturating_sub(self.last_boundary_ms);
        self.splits.push(Split {
            id: self.next_id,
            total_label: hms_cs(elapsed_ms),
            lap_ms,
            lap_label: hms_cs(lap_ms),
        });
        self.next_id += 1;
        self.last_boundary_ms = elapsed_ms;
        self.splits.last().expect("just pushed")
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    pub fn len(&self) -> usize {
        self.splits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    pub fn last_boundary_ms(&self) -> u64 {
        self.last_boundary_ms
    }

    pub fn clear(&mut self) {
        self.splits.clear();
        self.last_boundary_ms = 0;
        self.next_id = 1;
    }
}

impl Default for SplitLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lap_is_delta_from_previous_boundary() {
        let mut log = SplitLog::new();
        log.record(1_500);
        log.record(4_200);
        log.record(4_200); // same instant: zero-length lap

        let laps: Vec<u64> = log.splits().iter().map(|s| s.lap_ms).collect();
        assert_eq!(laps, vec![1_500, 2_700, 0]);
        assert_eq!(log.last_boundary_ms(), 4_200);
    }

    #[test]
    fn test_ids_increase_from_one() {
        let mut log = SplitLog::new();
        log.record(100);
        log.record(200);
        log.record(300);
        let ids: Vec<u32> = log.splits().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_labels_are_formatted_at_record_time() {
        let mut log = SplitLog::new();
        let split = log.record(62_340);
        assert_eq!(split.total_label, "00:01:02.34");
        assert_eq!(split.lap_label, "00:01:02.34");

        let split = log.record(63_000);
        assert_eq!(split.total_label, "00:01:03.00");
        assert_eq!(split.lap_label, "00:00:00.66");
    }

    #[test]
    fn test_clear_resets_boundary_and_ids() {
        let mut log = SplitLog::new();
        log.record(500);
        log.record(900);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.last_boundary_ms(), 0);

        let split = log.record(250);
        assert_eq!(split.id, 1);
        assert_eq!(split.lap_ms, 250);
    }
}
