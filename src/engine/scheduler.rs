//! Tick scheduling
//!
//! The engine never owns a clock. It asks a `TickScheduler` to start or
//! stop delivering ticks, and the scheduler guarantees at most one tick
//! source exists at a time.

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tracing::debug;

/// Cadence of the countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A single decrement event
///
/// The generation identifies which schedule produced the tick so ticks
/// queued before a cancellation can be told apart from current ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Starts and stops the periodic tick source
pub trait TickScheduler: Send {
    /// Begin delivering ticks, replacing any existing schedule
    fn schedule(&mut self);

    /// Stop delivering ticks; a no-op when nothing is scheduled
    fn cancel(&mut self);

    fn is_scheduled(&self) -> bool;
}

/// Tokio-backed scheduler sending ticks over a channel
#[derive(Debug)]
pub struct IntervalScheduler {
    tick_tx: mpsc::UnboundedSender<Tick>,
    period: Duration,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl IntervalScheduler {
    /// Create an idle scheduler; must be used from within a tokio runtime
    pub fn new(tick_tx: mpsc::UnboundedSender<Tick>, period: Duration) -> Self {
        Self {
            tick_tx,
            period,
            generation: 0,
            handle: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check whether a received tick belongs to the live schedule
    pub fn accepts(&self, tick: Tick) -> bool {
        self.handle.is_some() && tick.generation == self.generation
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule(&mut self) {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let period = self.period;
        let tick_tx = self.tick_tx.clone();

        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if tick_tx.send(Tick { generation }).is_err() {
                    debug!("Tick receiver closed, stopping tick source {}", generation);
                    break;
                }
            }
        }));
        debug!("Scheduled tick source {} every {:?}", generation, period);
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Cancelled tick source {}", self.generation);
        }
    }

    fn is_scheduled(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for IntervalScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Scheduler that records requests without running a clock
///
/// Callers deliver ticks themselves by calling `TimerEngine::tick`.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    active: bool,
    schedule_count: usize,
    cancel_count: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a tick source was started
    pub fn schedule_count(&self) -> usize {
        self.schedule_count
    }

    /// Number of times a live tick source was stopped
    pub fn cancel_count(&self) -> usize {
        self.cancel_count
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self) {
        self.cancel();
        self.active = true;
        self.schedule_count += 1;
    }

    fn cancel(&mut self) {
        if self.active {
            self.active = false;
            self.cancel_count += 1;
        }
    }

    fn is_scheduled(&self) -> bool {
        self.active
    }
}
