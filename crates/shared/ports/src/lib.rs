//! jamclock Ports
//!
//! Port definitions (traits) for the jamclock match clock.
//! These define the boundaries between the timer actor and its time sources
//! and callers.

mod clock;
mod error;
mod timer;

pub use clock::Clock;
pub use error::{ClockError, ClockResult, StackError, StackResult, TimerError, TimerResult};
pub use timer::RevertibleTimer;
