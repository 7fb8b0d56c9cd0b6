use std::time::Instant;

/// Port for time abstraction
///
/// This allows the timer to use different time sources:
/// - Real monotonic time for production
/// - Manually advanced time for deterministic tests and replays
///
/// Implementations must be monotonic: successive calls never go backwards.
pub trait Clock: Send + Sync {
    /// Get the current instant according to this clock
    fn now(&self) -> Instant;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
