mod segment;
mod timer_command;
mod timer_state;

pub use segment::{PeriodPhase, Segment};
pub use timer_command::TimerCommand;
pub use timer_state::TimerState;
