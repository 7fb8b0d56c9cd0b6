//! Timer run loop
//!
//! One task owns the state machine. Commands and tick pulses are taken off
//! their channels one at a time, so no two mutations ever overlap. A slow
//! sample reader holds back pulses, never commands.

use jamclock_clock::TickReceiver;
use jamclock_core::TimerCommand;
use jamclock_ports::{Clock, TimerResult};
use log::{debug, error, info, trace, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};

use crate::machine::TimerMachine;

/// Command plus the channel its single response goes back on
pub(crate) struct TimerRequest {
    pub command: TimerCommand,
    pub reply_tx: oneshot::Sender<TimerResult<()>>,
}

pub(crate) struct TimerActor {
    /// Timer name used in log lines
    name: String,
    clock: Arc<dyn Clock>,
    machine: TimerMachine,
    /// Elapsed samples out; capacity 1, so at most one sample waits for the reader
    sample_tx: mpsc::Sender<Duration>,
    /// Raised before Close is answered; the stream stops handing out samples
    closed: Arc<AtomicBool>,
}

impl TimerActor {
    pub(crate) fn new(
        name: String,
        clock: Arc<dyn Clock>,
        sample_tx: mpsc::Sender<Duration>,
        closed: Arc<AtomicBool>,
    ) -> Self {
        let machine = TimerMachine::new(clock.now());
        Self {
            name,
            clock,
            machine,
            sample_tx,
            closed,
        }
    }

    /// Serve commands and pulses until closed
    ///
    /// A pending command is always taken before a pending pulse.
    pub(crate) async fn run(
        mut self,
        mut command_rx: mpsc::Receiver<TimerRequest>,
        tick_rx: TickReceiver,
    ) {
        info!("[{}] Timer started on {}", self.name, self.clock.name());
        let mut tick_rx = Some(tick_rx);

        loop {
            tokio::select! {
                biased;

                request = command_rx.recv() => {
                    if let Flow::Shutdown = self.dispatch(request) {
                        break;
                    }
                }

                pulse = next_pulse(&mut tick_rx) => {
                    match pulse {
                        Some(at) => match self.handle_tick(at, &mut command_rx).await {
                            TickOutcome::Continue => {}
                            TickOutcome::ReaderGone => tick_rx = None,
                            TickOutcome::Shutdown => break,
                        },
                        None => {
                            info!("[{}] Tick feed closed", self.name);
                            tick_rx = None;
                        }
                    }
                }
            }
        }

        info!("[{}] Timer stopped", self.name);
    }

    /// Apply one request off the command channel
    fn dispatch(&mut self, request: Option<TimerRequest>) -> Flow {
        match request {
            Some(TimerRequest {
                command: TimerCommand::Close,
                reply_tx,
            }) => {
                debug!(
                    "[{}] Shutting down timer: base={:?} elapsed={:?}",
                    self.name,
                    self.machine.base(),
                    self.machine.elapsed()
                );
                self.closed.store(true, Ordering::SeqCst);
                let _ = reply_tx.send(Ok(()));
                Flow::Shutdown
            }
            Some(request) => {
                self.handle_command(request);
                Flow::Continue
            }
            None => {
                info!("[{}] All handles dropped", self.name);
                Flow::Shutdown
            }
        }
    }

    fn handle_command(&mut self, request: TimerRequest) {
        let TimerRequest { command, reply_tx } = request;
        let from = self.machine.state();
        let result = self.machine.apply(command, self.clock.now());

        match &result {
            Ok(()) => debug!(
                "[{}] {}: {} -> {} base={:?} elapsed={:?}",
                self.name,
                command,
                from,
                self.machine.state(),
                self.machine.base(),
                self.machine.elapsed()
            ),
            Err(e) => warn!("[{}] {} rejected in {}: {}", self.name, command, from, e),
        }

        // The caller may have given up waiting
        let _ = reply_tx.send(result);
    }

    /// Emit the sample for a pulse at `at`
    ///
    /// While the reader has not taken the previous sample, commands keep being
    /// served; the pending sample keeps the value it had at pulse time. Close
    /// drops it.
    async fn handle_tick(
        &mut self,
        at: Instant,
        command_rx: &mut mpsc::Receiver<TimerRequest>,
    ) -> TickOutcome {
        let sample = match self.machine.sample(at) {
            Ok(sample) => sample,
            Err(e) => {
                error!("[{}] Cannot sample in {}: {}", self.name, self.machine.state(), e);
                return TickOutcome::Continue;
            }
        };

        trace!(
            "[{}] Tick in {}: sample={:?} base={:?} elapsed={:?}",
            self.name,
            self.machine.state(),
            sample,
            self.machine.base(),
            self.machine.elapsed()
        );

        // Same channel; a local handle keeps the permit's borrow off `self`
        let sample_tx = self.sample_tx.clone();
        loop {
            tokio::select! {
                biased;

                request = command_rx.recv() => {
                    if let Flow::Shutdown = self.dispatch(request) {
                        return TickOutcome::Shutdown;
                    }
                }

                permit = sample_tx.reserve() => {
                    return match permit {
                        Ok(permit) => {
                            permit.send(sample);
                            TickOutcome::Continue
                        }
                        Err(_) => {
                            debug!("[{}] Sample stream dropped, ignoring pulses", self.name);
                            TickOutcome::ReaderGone
                        }
                    };
                }
            }
        }
    }
}

enum Flow {
    Continue,
    Shutdown,
}

enum TickOutcome {
    Continue,
    /// Nobody reads samples any more
    ReaderGone,
    /// Close arrived or every handle was dropped
    Shutdown,
}

async fn next_pulse(tick_rx: &mut Option<TickReceiver>) -> Option<Instant> {
    match tick_rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
