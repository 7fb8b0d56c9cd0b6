use serde::{Deserialize, Serialize};
use std::fmt;

/// Running state of a revertible timer
///
/// The two revertible states hold exactly one undoable transition. Any further
/// start or stop moves the timer forward and consumes that opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// Initial state, also entered on reset
    #[default]
    Start,
    /// Running, the start that got us here can still be reverted
    RunningRevertible,
    /// Running, nothing to revert
    Running,
    /// Stopped, the stop that got us here can still be reverted
    StoppedRevertible,
    /// Stopped, nothing to revert
    Stopped,
}

impl TimerState {
    /// All states, in declaration order
    pub const ALL: [TimerState; 5] = [
        TimerState::Start,
        TimerState::RunningRevertible,
        TimerState::Running,
        TimerState::StoppedRevertible,
        TimerState::Stopped,
    ];

    /// Returns true if elapsed time is currently accumulating
    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running | TimerState::RunningRevertible)
    }

    /// Returns true if the last transition can be undone
    pub fn is_revertible(&self) -> bool {
        matches!(
            self,
            TimerState::RunningRevertible | TimerState::StoppedRevertible
        )
    }

    /// Returns true if a start command is accepted in this state
    pub fn can_start(&self) -> bool {
        !self.is_running()
    }

    /// Returns true if a stop command is accepted in this state
    pub fn can_stop(&self) -> bool {
        self.is_running()
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerState::Start => "START",
            TimerState::RunningRevertible => "RUNNING_REVERTIBLE",
            TimerState::Running => "RUNNING",
            TimerState::StoppedRevertible => "STOPPED_REVERTIBLE",
            TimerState::Stopped => "STOPPED",
        };
        f.write_str(name)
    }
}
