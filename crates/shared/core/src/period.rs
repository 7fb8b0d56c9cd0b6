//! Remaining-time arithmetic over the elapsed totals read back from timers
//!
//! Segment lengths come from a [`PeriodConfig`] owned by the caller; the timers
//! themselves know nothing about them.

use std::time::Duration;
use thiserror::Error;

use crate::{PeriodPhase, Segment};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodError {
    #[error("{0} has not yet started")]
    NotStarted(Segment),
}

pub type PeriodResult<T> = std::result::Result<T, PeriodError>;

/// Regulation lengths for each segment of a period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodConfig {
    pub period_length: Duration,
    pub lineup_length: Duration,
    pub jam_length: Duration,
    pub timeout_length: Duration,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            period_length: Duration::from_secs(30 * 60),
            lineup_length: Duration::from_secs(30),
            jam_length: Duration::from_secs(2 * 60),
            timeout_length: Duration::from_secs(60),
        }
    }
}

impl PeriodConfig {
    pub fn with_period_length(mut self, length: Duration) -> Self {
        self.period_length = length;
        self
    }

    pub fn with_lineup_length(mut self, length: Duration) -> Self {
        self.lineup_length = length;
        self
    }

    pub fn with_jam_length(mut self, length: Duration) -> Self {
        self.jam_length = length;
        self
    }

    pub fn with_timeout_length(mut self, length: Duration) -> Self {
        self.timeout_length = length;
        self
    }

    /// Regulation length of a segment
    pub fn length(&self, segment: Segment) -> Duration {
        match segment {
            Segment::Period => self.period_length,
            Segment::Lineup => self.lineup_length,
            Segment::Jam => self.jam_length,
            Segment::Timeout => self.timeout_length,
        }
    }
}

/// Elapsed time for the current period, lineup, jam, and timeout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodClock {
    pub phase: PeriodPhase,
    pub period_elapsed: Duration,
    pub lineup_elapsed: Duration,
    pub jam_elapsed: Duration,
    pub timeout_elapsed: Duration,
}

impl PeriodClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed total recorded for a segment
    pub fn elapsed(&self, segment: Segment) -> Duration {
        match segment {
            Segment::Period => self.period_elapsed,
            Segment::Lineup => self.lineup_elapsed,
            Segment::Jam => self.jam_elapsed,
            Segment::Timeout => self.timeout_elapsed,
        }
    }

    /// Store an elapsed sample read from the segment's timer
    pub fn record(&mut self, segment: Segment, elapsed: Duration) {
        match segment {
            Segment::Period => self.period_elapsed = elapsed,
            Segment::Lineup => self.lineup_elapsed = elapsed,
            Segment::Jam => self.jam_elapsed = elapsed,
            Segment::Timeout => self.timeout_elapsed = elapsed,
        }
    }

    /// Time left in a segment
    ///
    /// A segment with exactly zero elapsed time has not started. Overtime
    /// saturates at zero.
    pub fn remaining(&self, segment: Segment, config: &PeriodConfig) -> PeriodResult<Duration> {
        let elapsed = self.elapsed(segment);
        if elapsed.is_zero() {
            return Err(PeriodError::NotStarted(segment));
        }
        Ok(config.length(segment).saturating_sub(elapsed))
    }

    pub fn period_remaining(&self, config: &PeriodConfig) -> PeriodResult<Duration> {
        self.remaining(Segment::Period, config)
    }

    pub fn lineup_remaining(&self, config: &PeriodConfig) -> PeriodResult<Duration> {
        self.remaining(Segment::Lineup, config)
    }

    pub fn jam_remaining(&self, config: &PeriodConfig) -> PeriodResult<Duration> {
        self.remaining(Segment::Jam, config)
    }

    pub fn timeout_remaining(&self, config: &PeriodConfig) -> PeriodResult<Duration> {
        self.remaining(Segment::Timeout, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_period_remaining() {
        let config = PeriodConfig::default();
        let clock = PeriodClock {
            period_elapsed: secs(25 * 60),
            ..Default::default()
        };
        assert_eq!(clock.period_remaining(&config), Ok(secs(5 * 60)));
    }

    #[test]
    fn test_period_not_started() {
        let clock = PeriodClock::new();
        let err = clock.period_remaining(&PeriodConfig::default()).unwrap_err();
        assert_eq!(err, PeriodError::NotStarted(Segment::Period));
        assert_eq!(err.to_string(), "period has not yet started");
    }

    #[test]
    fn test_jam_remaining() {
        let clock = PeriodClock {
            jam_elapsed: secs(25),
            ..Default::default()
        };
        assert_eq!(
            clock.jam_remaining(&PeriodConfig::default()),
            Ok(secs(120 - 25))
        );
    }

    #[test]
    fn test_lineup_overtime_saturates() {
        let clock = PeriodClock {
            lineup_elapsed: secs(25 * 60),
            ..Default::default()
        };
        assert_eq!(
            clock.lineup_remaining(&PeriodConfig::default()),
            Ok(Duration::ZERO)
        );
    }

    #[test]
    fn test_timeout_uses_configured_length() {
        let config = PeriodConfig::default().with_timeout_length(secs(90));
        let mut clock = PeriodClock::new();
        assert_eq!(
            clock.timeout_remaining(&config).unwrap_err().to_string(),
            "timeout has not yet started"
        );

        clock.record(Segment::Timeout, secs(30));
        assert_eq!(clock.timeout_remaining(&config), Ok(secs(60)));
    }

    #[test]
    fn test_record_only_touches_one_segment() {
        let mut clock = PeriodClock::new();
        clock.record(Segment::Jam, secs(10));
        assert_eq!(clock.elapsed(Segment::Jam), secs(10));
        assert_eq!(clock.elapsed(Segment::Period), Duration::ZERO);
        assert!(clock.lineup_remaining(&PeriodConfig::default()).is_err());
    }
}
