use jamclock_ports::Clock;
use std::time::Instant;

/// Wall-independent clock backed by the OS monotonic timer
///
/// Readings never go backwards, even when the system time is adjusted, so
/// elapsed durations computed from them are always valid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
