//! Once-per-second driver for a [`TimerSession`].
//!
//! The session is shared between the tick task and the command loop behind a
//! `parking_lot::Mutex`. Each tick takes the lock and calls
//! [`TimerSession::tick`], which re-checks `running`; a pause made under the
//! same lock is therefore never followed by a stray decrement. Stopping the
//! ticker cancels its token and no further ticks run after `stop` returns.

use super::timer::{TimerEvent, TimerSession};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// What the tick task reports back to the command loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickUpdate {
    /// A second elapsed; carries the remaining seconds.
    Tick(u64),
    Timer(TimerEvent),
}

pub struct Ticker {
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the tick task on the current tokio runtime.
    pub fn spawn(session: Arc<Mutex<TimerSession>>, updates: mpsc::UnboundedSender<TickUpdate>) -> Self {
        Self::spawn_with_interval(session, updates, TICK_INTERVAL)
    }

    pub fn spawn_with_interval(session: Arc<Mutex<TimerSession>>, updates: mpsc::UnboundedSender<TickUpdate>, period: Duration) -> Self {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        debug!("ticker cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        let update = {
                            let mut session = session.lock();
                            if !session.is_running() {
                                continue;
                            }
                            match session.tick() {
                                Some(event) => TickUpdate::Timer(event),
                                None => TickUpdate::Tick(session.remaining_seconds()),
                            }
                        };
                        if updates.send(update).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Ticker {
            cancel,
            handle: Some(handle),
        }
    }

    /// Cancels the tick task and waits for it to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
