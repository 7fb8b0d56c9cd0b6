//! jamclock Core Domain
//!
//! Pure domain types for the jamclock match clock.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod period;

// Re-export commonly used types at crate root
pub use entities::{PeriodPhase, Segment, TimerCommand, TimerState};
pub use period::{PeriodClock, PeriodConfig, PeriodError, PeriodResult};
