//! Lap statistics.

use crate::split::Split;

/// Average, best, and worst lap duration over a split sequence, in
/// milliseconds. The average truncates to whole milliseconds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LapStats {
    pub average_ms: u64,
    pub best_ms: u64,
    pub worst_ms: u64,
}

impl LapStats {
    /// Recomputed from scratch on every call; split counts are small enough
    /// that caching would buy nothing.
    pub fn from_splits(splits: &[Split]) -> Option<Self> {
        if splits.is_empty() {
            return None;
        }
        let mut sum = 0u64;
        let mut best = u64::MAX;
        let mut worst = 0u64;
        for split in splits {
            sum += split.lap_ms;
            best = best.min(split.lap_ms);
            worst = worst.max(split.lap_ms);
        }
        Some(Self {
            average_ms: sum / splits.len() as u64,
            best_ms: best,
            worst_ms: worst,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::SplitLog;

    fn laps(durations: &[u64]) -> Vec<Split> {
        let mut log = SplitLog::new();
        let mut total = 0;
        for &d in durations {
            total += d;
            log.record(total);
        }
        log.splits().to_vec()
    }

    #[test]
    fn test_empty_has_no_stats() {
        assert!(LapStats::from_splits(&[]).is_none());
    }

    #[test]
    fn test_single_lap() {
        let stats = LapStats::from_splits(&laps(&[420])).unwrap();
        assert_eq!(
            stats,
            LapStats {
                average_ms: 420,
                best_ms: 420,
                worst_ms: 420,
            }
        );
    }

    #[test]
    fn test_average_best_worst() {
        let stats = LapStats::from_splits(&laps(&[100, 300, 200])).unwrap();
        assert_eq!(stats.average_ms, 200);
        assert_eq!(stats.best_ms, 100);
        assert_eq!(stats.worst_ms, 300);
    }

    #[test]
    fn test_average_truncates() {
        let stats = LapStats::from_splits(&laps(&[100, 101])).unwrap();
        assert_eq!(stats.average_ms, 100);
    }
}
