use web_time::Duration;

pub type TimerId = u64;

/// Deferred-callback facility of the host event loop (`setTimeout` and
/// friends). Callbacks run on the same thread that scheduled them.
pub trait Timers {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;
    /// Clearing an id that already fired or was cleared is a no-op.
    fn clear_timeout(&self, id: TimerId);
}

/// Converts a millisecond count from the configuration surface, rounded to
/// whole microseconds. Any positive count stays positive.
pub fn millis(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_micros(((ms * 1000.0).round() as u64).max(1))
    } else {
        Duration::ZERO
    }
}
