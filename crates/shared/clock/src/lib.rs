//! jamclock Clock Infrastructure
//!
//! Provides the time sources and tick feed a timer is driven by:
//!
//! ```text
//! Clock (SystemClock | ManualClock)
//!     │ now()
//!     ├──────────────────────────┐
//!     ▼                          ▼
//! Ticker ── pulses ──▶ timer run loop ──▶ elapsed samples
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use jamclock_clock::{ManualClock, SystemClock, Ticker};
//! use std::time::Duration;
//!
//! // Production: real monotonic time, one pulse per second
//! let clock = Arc::new(SystemClock::new());
//! let (ticker, pulses) = Ticker::spawn(Duration::from_secs(1), clock.clone())?;
//!
//! // Tests: time only moves when told to
//! let manual = ManualClock::new();
//! manual.advance(Duration::from_secs(5));
//! ```

mod manual;
mod system;
mod ticker;

pub use manual::ManualClock;
pub use system::SystemClock;
pub use ticker::{TickReceiver, TickSender, Ticker, tick_channel};

// Re-export the Clock trait for convenience
pub use jamclock_ports::Clock;
