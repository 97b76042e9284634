//! Pure stopwatch logic with no platform dependencies.
//! The host owns the real timer and keyboard; everything here is driven by
//! explicit `tick(delta_ms)` calls, so it is fully testable on any target.

mod engine;
mod format;
mod split;
mod stats;
mod target;

pub use engine::{RunState, Stopwatch};
pub use format::{hms, hms_cs, TimeParts};
pub use split::{Split, SplitLog};
pub use stats::LapStats;
pub use target::{crossed, target_ms};

/// Nominal tick interval the host scheduler is expected to use.
pub const TICK_INTERVAL_MS: u64 = 10;
