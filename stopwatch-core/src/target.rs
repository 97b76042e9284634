//! Target threshold evaluation.

/// Combine hour/minute/second input fields into a millisecond threshold.
///
/// Each field parses independently; anything unparseable contributes zero,
/// so malformed input can never raise an error. All-zero fields mean
/// "no target" and yield 0.
pub fn target_ms(hours: &str, minutes: &str, seconds: &str) -> u64 {
    let h = hours.trim().parse::<u64>().unwrap_or(0);
    let m = minutes.trim().parse::<u64>().unwrap_or(0);
    let s = seconds.trim().parse::<u64>().unwrap_or(0);
    h * 3_600_000 + m * 60_000 + s * 1_000
}

/// True exactly on the tick that carries the counter across the threshold.
///
/// Requires a set target (> 0), the new value at or past it, and the
/// previous value still below it, so the alert fires once per crossing
/// rather than on every tick past the target.
pub fn crossed(prev_ms: u64, new_ms: u64, target_ms: u64) -> bool {
    target_ms > 0 && new_ms >= target_ms && prev_ms < target_ms
}
