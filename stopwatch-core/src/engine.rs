//! The stopwatch engine: a two-state machine over a logical elapsed-time
//! counter, plus the split log and target threshold it guards.

use crate::split::{Split, SplitLog};
use crate::target;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RunState {
    Stopped,
    Running,
}

/// Owns all mutable session state. The host drives it with `tick(delta_ms)`
/// at a fixed nominal cadence and with the user actions below; the display
/// layer only reads.
///
/// Elapsed time is a logical counter advanced by the nominal tick amount,
/// not a wall-clock measurement. Delayed tick delivery therefore slows the
/// stopwatch instead of jumping it; switching to wall-clock deltas would
/// change observable split timings, so this stays as-is.
pub struct Stopwatch {
    state: RunState,
    elapsed_ms: u64,
    target_ms: u64,
    splits: SplitLog,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            state: RunState::Stopped,
            elapsed_ms: 0,
            target_ms: 0,
            splits: SplitLog::new(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }

    /// Set the alert threshold in milliseconds; 0 disables it.
    pub fn set_target_ms(&mut self, ms: u64) {
        self.target_ms = ms;
    }

    /// Start/pause toggle: every call flips the state.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            RunState::Stopped => RunState::Running,
            RunState::Running => RunState::Stopped,
        };
    }

    /// Advance the counter by one nominal tick while running.
    ///
    /// Returns true exactly on the tick that crosses the target threshold,
    /// comparing the counter before and after the increment. A no-op while
    /// stopped: the counter stays frozen and nothing can fire.
    pub fn tick(&mut self, delta_ms: u64) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        let prev = self.elapsed_ms;
        self.elapsed_ms += delta_ms;
        target::crossed(prev, self.elapsed_ms, self.target_ms)
    }

    /// Record a split at the current elapsed time.
    ///
    /// Ignored unless running; returns the new entry otherwise.
    pub fn record_split(&mut self) -> Option<&Split> {
        if self.state != RunState::Running {
            return None;
        }
        Some(self.splits.record(self.elapsed_ms))
    }

    pub fn splits(&self) -> &[Split] {
        self.splits.splits()
    }

    /// Stop, zero the counter, and drop all splits. Safe in any state.
    /// The target threshold survives a reset.
    pub fn reset(&mut self) {
        self.state = RunState::Stopped;
        self.elapsed_ms = 0;
        self.splits.clear();
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(watch: &mut Stopwatch, ms: u64) {
        for _ in 0..ms / 10 {
            watch.tick(10);
        }
    }

    #[test]
    fn test_initial_state() {
        let watch = Stopwatch::new();
        assert_eq!(watch.state(), RunState::Stopped);
        assert_eq!(watch.elapsed_ms(), 0);
        assert!(watch.splits().is_empty());
    }

    #[test]
    fn test_toggle_flips_every_call() {
        let mut watch = Stopwatch::new();
        watch.toggle();
        assert_eq!(watch.state(), RunState::Running);
        watch.toggle();
        assert_eq!(watch.state(), RunState::Stopped);
        watch.toggle();
        assert_eq!(watch.state(), RunState::Running);
    }

    #[test]
    fn test_frozen_while_stopped() {
        let mut watch = Stopwatch::new();
        assert!(!watch.tick(10));
        assert_eq!(watch.elapsed_ms(), 0);

        watch.toggle();
        run_for(&mut watch, 500);
        watch.toggle();
        run_for(&mut watch, 500); // paused: these do nothing
        assert_eq!(watch.elapsed_ms(), 500);

        watch.toggle();
        run_for(&mut watch, 250);
        assert_eq!(watch.elapsed_ms(), 750);
    }

    #[test]
    fn test_split_while_stopped_is_ignored() {
        let mut watch = Stopwatch::new();
        assert!(watch.record_split().is_none());
        assert_eq!(watch.splits().len(), 0);

        watch.toggle();
        run_for(&mut watch, 100);
        watch.toggle();
        assert!(watch.record_split().is_none());
        assert_eq!(watch.splits().len(), 0);
    }

    #[test]
    fn test_split_sequence_end_to_end() {
        let mut watch = Stopwatch::new();
        watch.toggle();

        run_for(&mut watch, 1_500);
        let split = watch.record_split().expect("running");
        assert_eq!(split.lap_ms, 1_500);

        run_for(&mut watch, 2_700);
        let split = watch.record_split().expect("running");
        assert_eq!(split.lap_ms, 2_700);
        assert_eq!(split.total_label, "00:00:04.20");

        watch.reset();
        assert_eq!(watch.state(), RunState::Stopped);
        assert_eq!(watch.elapsed_ms(), 0);
        assert!(watch.splits().is_empty());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut watch = Stopwatch::new();
        watch.reset(); // stopped + empty: still fine

        watch.toggle();
        run_for(&mut watch, 300);
        watch.record_split();
        watch.reset();
        assert_eq!(watch.elapsed_ms(), 0);
        assert!(watch.splits().is_empty());
        assert_eq!(watch.state(), RunState::Stopped);
    }

    #[test]
    fn test_target_crossing_fires_exactly_once() {
        let mut watch = Stopwatch::new();
        watch.set_target_ms(5_000);
        watch.toggle();

        let mut fired = 0;
        for _ in 0..600 {
            if watch.tick(10) {
                fired += 1;
                // Fires on the 4990 -> 5000 transition.
                assert_eq!(watch.elapsed_ms(), 5_000);
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(watch.elapsed_ms(), 6_000);
    }

    #[test]
    fn test_target_refires_after_reset() {
        let mut watch = Stopwatch::new();
        watch.set_target_ms(100);
        watch.toggle();
        run_for(&mut watch, 200);

        watch.reset();
        watch.toggle();
        let mut fired = 0;
        for _ in 0..20 {
            if watch.tick(10) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_zero_target_never_fires() {
        let mut watch = Stopwatch::new();
        watch.toggle();
        for _ in 0..10_000 {
            assert!(!watch.tick(10));
        }
    }

    #[test]
    fn test_pause_at_target_does_not_refire_on_resume() {
        let mut watch = Stopwatch::new();
        watch.set_target_ms(100);
        watch.toggle();
        run_for(&mut watch, 100); // fires inside here
        watch.toggle();
        watch.toggle();
        assert!(!watch.tick(10)); // already past target
    }
}
