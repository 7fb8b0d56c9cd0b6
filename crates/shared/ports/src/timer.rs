use async_trait::async_trait;

use crate::error::TimerResult;

/// Port for a stopwatch that can be started, stopped, and undone one step
///
/// Every method is one request/response round trip. A failed command is a
/// no-op on the timer.
#[async_trait]
pub trait RevertibleTimer: Send + Sync {
    /// Begin or resume the timer
    async fn start(&self) -> TimerResult<()>;

    /// Halt the timer and freeze the elapsed time
    async fn stop(&self) -> TimerResult<()>;

    /// Undo the most recent start or stop
    ///
    /// Only available once after each start or stop.
    async fn revert(&self) -> TimerResult<()>;

    /// Return to the start state and zero the elapsed time
    async fn reset(&self) -> TimerResult<()>;

    /// Stop the timer and shut down its run loop
    async fn close(&self) -> TimerResult<()>;
}
