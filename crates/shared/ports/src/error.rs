use thiserror::Error;

/// Errors from the bounded undo stacks
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("the stack size must be a positive integer")]
    InvalidCapacity,

    #[error("stack is full")]
    Overflow,

    #[error("stack is empty")]
    Underflow,
}

pub type StackResult<T> = std::result::Result<T, StackError>;

/// Errors returned to timer callers
///
/// All of these are local to one command: a failed command leaves the timer
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Revert not available")]
    RevertUnavailable,

    #[error("Stack error: {0}")]
    Stack(#[from] StackError),

    #[error("Timer closed")]
    Closed,
}

impl TimerError {
    pub fn already_running() -> Self {
        TimerError::InvalidTransition("already running".to_string())
    }

    pub fn already_stopped() -> Self {
        TimerError::InvalidTransition("already stopped".to_string())
    }
}

pub type TimerResult<T> = std::result::Result<T, TimerError>;

/// Errors from time sources and pulse generators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid tick interval: {0}")]
    InvalidInterval(String),
}

pub type ClockResult<T> = std::result::Result<T, ClockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_messages() {
        assert_eq!(StackError::Overflow.to_string(), "stack is full");
        assert_eq!(StackError::Underflow.to_string(), "stack is empty");
    }

    #[test]
    fn test_timer_messages() {
        assert_eq!(
            TimerError::already_running().to_string(),
            "Invalid transition: already running"
        );
        assert_eq!(
            TimerError::from(StackError::Underflow),
            TimerError::Stack(StackError::Underflow)
        );
    }
}
