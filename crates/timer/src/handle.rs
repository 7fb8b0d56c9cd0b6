//! Caller-facing side of a timer: command handle and sample stream

use async_trait::async_trait;
use jamclock_clock::{TickReceiver, Ticker};
use jamclock_core::TimerCommand;
use jamclock_ports::{Clock, ClockResult, RevertibleTimer, TimerError, TimerResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::sync::oneshot;

use crate::actor::{TimerActor, TimerRequest};
use crate::config::TimerConfig;

/// Cloneable command handle to a running timer
///
/// Any number of callers may hold a handle. Each command is applied whole,
/// and commands from one caller are applied in the order sent.
#[derive(Clone)]
pub struct TimerHandle {
    command_tx: mpsc::Sender<TimerRequest>,
}

impl TimerHandle {
    async fn send(&self, command: TimerCommand) -> TimerResult<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(TimerRequest { command, reply_tx })
            .await
            .map_err(|_| TimerError::Closed)?;

        reply_rx.await.map_err(|_| TimerError::Closed)?
    }

    /// Returns true once the run loop has shut down
    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }
}

#[async_trait]
impl RevertibleTimer for TimerHandle {
    async fn start(&self) -> TimerResult<()> {
        self.send(TimerCommand::Start).await
    }

    async fn stop(&self) -> TimerResult<()> {
        self.send(TimerCommand::Stop).await
    }

    async fn revert(&self) -> TimerResult<()> {
        self.send(TimerCommand::Revert).await
    }

    async fn reset(&self) -> TimerResult<()> {
        self.send(TimerCommand::Reset).await
    }

    /// Closing an already closed timer succeeds
    async fn close(&self) -> TimerResult<()> {
        match self.send(TimerCommand::Close).await {
            Err(TimerError::Closed) => Ok(()),
            result => result,
        }
    }
}

/// Read-only stream of elapsed samples, one per tick pulse
///
/// Ends (yields `None`) once the timer is closed. A sample still buffered when
/// Close is answered is never handed out.
pub struct ElapsedStream {
    rx: mpsc::Receiver<Duration>,
    closed: Arc<AtomicBool>,
}

impl ElapsedStream {
    /// Wait for the next sample
    pub async fn next(&mut self) -> Option<Duration> {
        let sample = self.rx.recv().await?;
        (!self.is_closed()).then_some(sample)
    }

    /// Take a sample if one is ready
    pub fn try_next(&mut self) -> TimerResult<Option<Duration>> {
        match self.rx.try_recv() {
            Ok(_) if self.is_closed() => Err(TimerError::Closed),
            Ok(sample) => Ok(Some(sample)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(TimerError::Closed),
        }
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// A spawned timer: its command handle together with its sample stream
pub struct SystemTimer {
    handle: TimerHandle,
    samples: ElapsedStream,
}

impl SystemTimer {
    /// Spawn a timer driven by `ticks` and reading time from `clock`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(ticks: TickReceiver, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(ticks, clock, &TimerConfig::default())
    }

    pub fn with_config(ticks: TickReceiver, clock: Arc<dyn Clock>, config: &TimerConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel(config.command_capacity.max(1));
        let (sample_tx, sample_rx) = mpsc::channel(1);
        let closed = Arc::new(AtomicBool::new(false));

        let actor = TimerActor::new(config.name.clone(), clock, sample_tx, closed.clone());
        tokio::spawn(actor.run(command_rx, ticks));

        Self {
            handle: TimerHandle { command_tx },
            samples: ElapsedStream {
                rx: sample_rx,
                closed,
            },
        }
    }

    /// Spawn a timer fed by its own [`Ticker`] at the configured interval
    ///
    /// Dropping the returned ticker stops the pulses; the timer keeps serving
    /// commands.
    pub fn with_ticker(clock: Arc<dyn Clock>, config: &TimerConfig) -> ClockResult<(Self, Ticker)> {
        let (ticker, ticks) = Ticker::spawn(config.tick_interval, clock.clone())?;
        Ok((Self::with_config(ticks, clock, config), ticker))
    }

    /// Another handle to this timer
    pub fn handle(&self) -> TimerHandle {
        self.handle.clone()
    }

    pub fn samples(&mut self) -> &mut ElapsedStream {
        &mut self.samples
    }

    /// Wait for the next elapsed sample
    pub async fn next_sample(&mut self) -> Option<Duration> {
        self.samples.next().await
    }

    pub fn into_parts(self) -> (TimerHandle, ElapsedStream) {
        (self.handle, self.samples)
    }
}

#[async_trait]
impl RevertibleTimer for SystemTimer {
    async fn start(&self) -> TimerResult<()> {
        self.handle.start().await
    }

    async fn stop(&self) -> TimerResult<()> {
        self.handle.stop().await
    }

    async fn revert(&self) -> TimerResult<()> {
        self.handle.revert().await
    }

    async fn reset(&self) -> TimerResult<()> {
        self.handle.reset().await
    }

    async fn close(&self) -> TimerResult<()> {
        self.handle.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jamclock_clock::{ManualClock, tick_channel};

    #[tokio::test]
    async fn test_commands_round_trip() {
        let clock = ManualClock::new();
        let (_tick_tx, ticks) = tick_channel();
        let timer = SystemTimer::spawn(ticks, clock);

        assert_eq!(timer.start().await, Ok(()));
        assert_eq!(timer.start().await, Err(TimerError::already_running()));
        assert_eq!(timer.close().await, Ok(()));
    }

    #[tokio::test]
    async fn test_commands_after_close() {
        let clock = ManualClock::new();
        let (_tick_tx, ticks) = tick_channel();
        let timer = SystemTimer::spawn(ticks, clock);
        let handle = timer.handle();

        timer.close().await.unwrap();

        assert_eq!(handle.start().await, Err(TimerError::Closed));
        assert_eq!(handle.close().await, Ok(()));
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn test_try_next() {
        let clock = ManualClock::new();
        let (tick_tx, ticks) = tick_channel();
        let mut timer = SystemTimer::spawn(ticks, clock.clone());

        assert_eq!(timer.samples().try_next(), Ok(None));

        tick_tx.send(clock.now()).await.unwrap();
        assert_eq!(timer.next_sample().await, Some(Duration::ZERO));

        timer.close().await.unwrap();
        assert_eq!(timer.samples().next().await, None);
        assert_eq!(timer.samples().try_next(), Err(TimerError::Closed));
    }

    #[tokio::test]
    async fn test_buffered_sample_withheld_after_close() {
        let clock = ManualClock::new();
        let (tick_tx, ticks) = tick_channel();
        let mut timer = SystemTimer::spawn(ticks, clock.clone());

        tick_tx.send(clock.now()).await.unwrap();
        tick_tx.send(clock.now()).await.unwrap();

        timer.close().await.unwrap();
        assert_eq!(timer.samples().try_next(), Err(TimerError::Closed));
        assert_eq!(timer.next_sample().await, None);
    }

    #[tokio::test]
    async fn test_dropping_handles_ends_run_loop() {
        let clock = ManualClock::new();
        let (_tick_tx, ticks) = tick_channel();
        let timer = SystemTimer::spawn(ticks, clock);
        let (handle, mut samples) = timer.into_parts();

        drop(handle);
        assert_eq!(samples.next().await, None);
    }
}
