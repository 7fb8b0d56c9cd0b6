//! Revertible stopwatch state machine
//!
//! Two stacks back the single-step undo:
//!
//! - `base`: instants at which runs started
//! - `elapsed`: elapsed time frozen at each stop
//!
//! Start pushes onto `base`, stop pushes onto `elapsed`, and revert pops
//! whichever one the last transition pushed. Advancing commits the opposite
//! stack down to its top, so each stack holds at most two entries and never
//! both at once.

use jamclock_core::{TimerCommand, TimerState};
use jamclock_ports::{StackError, StackResult, TimerError, TimerResult};
use std::time::{Duration, Instant};

use crate::stack::BoundedStack;

/// Depth of each undo stack: the committed value plus one revertible entry
pub const UNDO_DEPTH: usize = 2;

/// Synchronous core of the timer actor
///
/// Every operation either succeeds or leaves the machine untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerMachine {
    state: TimerState,
    base: BoundedStack<Instant>,
    elapsed: BoundedStack<Duration>,
}

impl TimerMachine {
    /// Create a machine in the start state, seeded at `now`
    pub fn new(now: Instant) -> Self {
        Self {
            state: TimerState::Start,
            base: BoundedStack::seeded(UNDO_DEPTH, now),
            elapsed: BoundedStack::seeded(UNDO_DEPTH, Duration::ZERO),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Run start instants, most recent first
    pub fn base(&self) -> &BoundedStack<Instant> {
        &self.base
    }

    /// Frozen elapsed values, most recent first
    pub fn elapsed(&self) -> &BoundedStack<Duration> {
        &self.elapsed
    }

    /// Apply a command at `now`
    ///
    /// Close is accepted in every state and changes nothing here; shutting
    /// down is the run loop's job.
    pub fn apply(&mut self, command: TimerCommand, now: Instant) -> TimerResult<()> {
        match command {
            TimerCommand::Start => self.start(now),
            TimerCommand::Stop => self.stop(now),
            TimerCommand::Revert => self.revert(),
            TimerCommand::Reset => {
                self.reset(now);
                Ok(())
            }
            TimerCommand::Close => Ok(()),
        }
    }

    pub fn start(&mut self, now: Instant) -> TimerResult<()> {
        if !self.state.can_start() {
            return Err(TimerError::already_running());
        }

        self.base.push(now)?;
        self.elapsed.commit();
        self.state = TimerState::RunningRevertible;
        Ok(())
    }

    pub fn stop(&mut self, now: Instant) -> TimerResult<()> {
        if !self.state.can_stop() {
            return Err(TimerError::already_stopped());
        }

        let started = self.base.top()?;
        self.elapsed.push(now.saturating_duration_since(started))?;
        self.base.commit();
        self.state = TimerState::StoppedRevertible;
        Ok(())
    }

    pub fn revert(&mut self) -> TimerResult<()> {
        match self.state {
            TimerState::RunningRevertible => {
                undo(&mut self.base)?;
                self.state = TimerState::Stopped;
                Ok(())
            }
            TimerState::StoppedRevertible => {
                undo(&mut self.elapsed)?;
                self.state = TimerState::Running;
                Ok(())
            }
            _ => Err(TimerError::RevertUnavailable),
        }
    }

    pub fn reset(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    /// Elapsed time to report for a tick at `at`
    ///
    /// While running this is the time since the current run started; any time
    /// frozen by an earlier stop is not added back. While stopped it is the
    /// frozen value.
    pub fn sample(&self, at: Instant) -> TimerResult<Duration> {
        if self.state.is_running() {
            let started = self.base.top()?;
            Ok(at.saturating_duration_since(started))
        } else {
            Ok(self.elapsed.top()?)
        }
    }
}

/// Pop the revertible entry, refusing to empty the stack
fn undo<T: Copy>(stack: &mut BoundedStack<T>) -> StackResult<T> {
    if stack.size() < 2 {
        return Err(StackError::Underflow);
    }
    stack.pop()
}
