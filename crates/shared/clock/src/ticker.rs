use jamclock_ports::{Clock, ClockError, ClockResult};
use log::{debug, info, trace};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Sending half of a tick feed
pub type TickSender = mpsc::Sender<Instant>;

/// Receiving half of a tick feed, consumed by a timer run loop
pub type TickReceiver = mpsc::Receiver<Instant>;

/// Create a tick feed holding at most one undelivered pulse
pub fn tick_channel() -> (TickSender, TickReceiver) {
    mpsc::channel(1)
}

/// Periodic pulse generator
///
/// Emits one pulse per interval, stamped with the injected clock's reading.
/// Delivery is best-effort: if the previous pulse has not been consumed yet,
/// the new one is dropped rather than queued.
pub struct Ticker {
    interval: Duration,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker task and return it with the receiving end of its feed
    ///
    /// The first pulse is emitted one full interval after spawning.
    pub fn spawn(interval: Duration, clock: Arc<dyn Clock>) -> ClockResult<(Self, TickReceiver)> {
        if interval.is_zero() {
            return Err(ClockError::InvalidInterval(
                "interval must be greater than zero".to_string(),
            ));
        }

        let (tx, rx) = tick_channel();
        let handle = tokio::spawn(Self::run(tx, clock, interval));

        Ok((Self { interval, handle }, rx))
    }

    async fn run(tx: TickSender, clock: Arc<dyn Clock>, period: Duration) {
        info!(
            "Starting ticker with interval of {}ms on {}",
            period.as_millis(),
            clock.name()
        );

        let mut ticks = tokio::time::interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // The first tick completes immediately
        ticks.tick().await;

        loop {
            ticks.tick().await;

            match tx.try_send(clock.now()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    trace!("Previous pulse not consumed, dropping this one");
                }
                Err(TrySendError::Closed(_)) => {
                    debug!("Tick receiver dropped, stopping ticker");
                    break;
                }
            }
        }
    }

    /// Configured pulse interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop emitting pulses; the feed closes once the task is gone
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Returns true once the ticker task has ended
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
