//! jamclock Timer - Revertible Stopwatch Actor
//!
//! A timer tracks elapsed running time for one match clock. Callers drive it
//! with start/stop commands and may undo the most recent one; a tick feed
//! makes it emit the current elapsed time once per pulse.
//!
//! ## Architecture
//!
//! ```text
//!   TimerHandle(s)                    Ticker / tick feed
//!        │ command + oneshot reply          │ Instant
//!        ▼                                  ▼
//! ┌──────────────────────────────────────────────────┐
//! │                timer run loop (task)             │
//! │                                                  │
//! │   TimerMachine: state + base stack + elapsed     │
//! └────────────────────────┬─────────────────────────┘
//!                          │ Duration (capacity 1)
//!                          ▼
//!                    ElapsedStream
//! ```
//!
//! ## State machine
//!
//! ```text
//! Start --start--> RunningRevertible --stop--> StoppedRevertible --start--> RunningRevertible
//! RunningRevertible --revert--> Stopped --start--> RunningRevertible
//! StoppedRevertible --revert--> Running --stop--> StoppedRevertible
//! (any) --reset--> Start
//! (any) --close--> run loop ends
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use jamclock_clock::{SystemClock, tick_channel};
//! use jamclock_timer::{RevertibleTimer, SystemTimer, TimerConfig};
//!
//! let clock = Arc::new(SystemClock::new());
//! let (mut timer, _ticker) = SystemTimer::with_ticker(clock, &TimerConfig::new("jam"))?;
//!
//! timer.start().await?;
//! while let Some(elapsed) = timer.next_sample().await {
//!     println!("{elapsed:?}");
//! }
//! ```

mod actor;
pub mod config;
pub mod handle;
pub mod machine;
pub mod stack;

// Re-export main types
pub use config::{
    ClockConfigFile, ConfigError, ConfigResult, PeriodConfigJson, TimerConfig, TimerConfigJson,
    load_config, load_config_from_str,
};
pub use handle::{ElapsedStream, SystemTimer, TimerHandle};
pub use machine::{TimerMachine, UNDO_DEPTH};
pub use stack::BoundedStack;

// Re-export the port types callers need alongside the timer
pub use jamclock_core::{TimerCommand, TimerState};
pub use jamclock_ports::{RevertibleTimer, StackError, TimerError, TimerResult};
