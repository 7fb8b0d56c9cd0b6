use serde::{Deserialize, Serialize};
use std::fmt;

/// Command accepted by a revertible timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerCommand {
    /// Begin or resume running
    Start,
    /// Halt and freeze the elapsed time
    Stop,
    /// Undo the most recent start or stop
    Revert,
    /// Return to the start state with zero elapsed time
    Reset,
    /// Shut the timer down
    Close,
}

impl TimerCommand {
    pub const ALL: [TimerCommand; 5] = [
        TimerCommand::Start,
        TimerCommand::Stop,
        TimerCommand::Revert,
        TimerCommand::Reset,
        TimerCommand::Close,
    ];
}

impl fmt::Display for TimerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerCommand::Start => "start",
            TimerCommand::Stop => "stop",
            TimerCommand::Revert => "revert",
            TimerCommand::Reset => "reset",
            TimerCommand::Close => "close",
        };
        f.write_str(name)
    }
}
