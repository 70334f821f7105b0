use std::time::Duration;

use log::debug;
use tokio::{
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
    time::{Instant, interval_at},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Elapsed,
    Rest,
}

/// A periodic message produced by a running [`Ticker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub timer: TimerKind,
    generation: u64,
}

/// Produces one [`Tick`] per period while started.
///
/// Every start or stop begins a new generation. Ticks of an earlier
/// generation are rejected by [`Ticker::accepts`], so ticks that were already
/// queued when the ticker was stopped or restarted have no effect.
pub struct Ticker {
    timer: TimerKind,
    period: Duration,
    sender: UnboundedSender<Tick>,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    #[must_use]
    pub fn new(timer: TimerKind, sender: UnboundedSender<Tick>) -> Self {
        Self::with_period(timer, Duration::from_secs(1), sender)
    }

    #[must_use]
    pub fn with_period(
        timer: TimerKind,
        period: Duration,
        sender: UnboundedSender<Tick>,
    ) -> Self {
        Self {
            timer,
            period,
            sender,
            generation: 0,
            handle: None,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start producing ticks, replacing a running producer.
    ///
    /// Must be called within a Tokio runtime.
    pub fn start(&mut self) {
        self.stop();
        let tick = Tick {
            timer: self.timer,
            generation: self.generation,
        };
        let period = self.period;
        let sender = self.sender.clone();
        debug!(
            "starting {:?} ticker (generation {})",
            self.timer, tick.generation
        );
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if sender.send(tick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(
                "stopped {:?} ticker (generation {})",
                self.timer, self.generation
            );
        }
        self.generation += 1;
    }

    #[must_use]
    pub fn accepts(&self, tick: Tick) -> bool {
        self.is_running() && tick.timer == self.timer && tick.generation == self.generation
    }

    #[cfg(test)]
    pub(crate) fn current_tick(&self) -> Tick {
        Tick {
            timer: self.timer,
            generation: self.generation,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
