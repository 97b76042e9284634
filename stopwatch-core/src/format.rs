//! Elapsed-time formatting.

/// An elapsed-millisecond count broken into display fields.
///
/// Hours are unbounded; minutes and seconds stay in 0-59 and hundredths in
/// 0-99. Hundredths are truncated from the millisecond remainder, not
/// rounded, so the displayed value never runs ahead of the counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub hundredths: u64,
}

impl TimeParts {
    pub fn from_ms(ms: u64) -> Self {
        let total_secs = ms / 1000;
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs % 3600) / 60,
            seconds: total_secs % 60,
            hundredths: (ms % 1000) / 10,
        }
    }
}

/// Format milliseconds as "HH:MM:SS"
pub fn hms(ms: u64) -> String {
    let t = TimeParts::from_ms(ms);
    format!("{:02}:{:02}:{:02}", t.hours, t.minutes, t.seconds)
}

/// Format milliseconds as "HH:MM:SS.cc" (centiseconds)
pub fn hms_cs(ms: u64) -> String {
    let t = TimeParts::from_ms(ms);
    format!(
        "{:02}:{:02}:{:02}.{:02}",
        t.hours, t.minutes, t.seconds, t.hundredths
    )
}
