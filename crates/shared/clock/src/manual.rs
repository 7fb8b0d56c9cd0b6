use jamclock_ports::Clock;
use log::warn;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Clock that only advances when explicitly moved
///
/// Readings are `origin + offset`, where the offset starts at zero and is
/// changed by [`advance`](ManualClock::advance) or [`set`](ManualClock::set).
/// The offset only ever holds values that `origin + offset` can represent.
/// Useful for deterministic tests and for replaying a recorded bout.
pub struct ManualClock {
    /// Instant captured at creation
    origin: Instant,
    /// Offset from the origin
    offset: RwLock<Duration>,
}

impl ManualClock {
    /// Create a new manual clock frozen at the current instant
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            origin: Instant::now(),
            offset: RwLock::new(Duration::ZERO),
        })
    }

    /// The instant this clock started from
    pub fn origin(&self) -> Instant {
        self.origin
    }

    /// Time elapsed since the origin
    pub fn offset(&self) -> Duration {
        *self.offset.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Advance the clock by a duration
    ///
    /// An advance past the last representable instant is ignored and the
    /// clock keeps its current reading.
    pub fn advance(&self, duration: Duration) {
        let mut offset = self.offset.write().unwrap_or_else(|e| e.into_inner());
        match offset
            .checked_add(duration)
            .filter(|next| self.origin.checked_add(*next).is_some())
        {
            Some(next) => *offset = next,
            None => warn!(
                "ManualClock: advancing {:?} by {:?} overflows, ignored",
                *offset, duration
            ),
        }
    }

    /// Move the clock to a given instant
    ///
    /// Instants before the current reading are ignored so the clock stays
    /// monotonic.
    pub fn set(&self, instant: Instant) {
        let target = instant.saturating_duration_since(self.origin);
        let mut offset = self.offset.write().unwrap_or_else(|e| e.into_inner());
        if target > *offset {
            *offset = target;
        }
    }

    /// Instant `duration` after the origin, handy for building test timelines
    ///
    /// # Panics
    ///
    /// If the instant cannot be represented.
    pub fn at(&self, duration: Duration) -> Instant {
        self.origin + duration
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        // advance/set keep origin + offset representable
        self.origin.checked_add(self.offset()).unwrap_or(self.origin)
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_frozen() {
        let clock = ManualClock::new();
        let time1 = clock.now();
        std::thread::sleep(Duration::from_millis(5));
        let time2 = clock.now();

        assert_eq!(time1, time2);
        assert_eq!(time1, clock.origin());
    }

    #[test]
    fn test_advance() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(5));
        clock.advance(Duration::from_millis(500));

        assert_eq!(clock.offset(), Duration::from_millis(5500));
        assert_eq!(clock.now() - clock.origin(), Duration::from_millis(5500));
    }

    #[test]
    fn test_overflowing_advance_is_ignored() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(2));

        clock.advance(Duration::MAX);
        assert_eq!(clock.offset(), Duration::from_secs(2));
        assert_eq!(clock.now(), clock.at(Duration::from_secs(2)));

        // Smaller steps still work afterwards
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), clock.at(Duration::from_secs(3)));
    }

    #[test]
    fn test_set_never_goes_backwards() {
        let clock = ManualClock::new();
        clock.set(clock.at(Duration::from_secs(3)));
        assert_eq!(clock.now(), clock.at(Duration::from_secs(3)));

        clock.set(clock.at(Duration::from_secs(1)));
        assert_eq!(clock.now(), clock.at(Duration::from_secs(3)));
    }
}
