//! Timer controller background task
//!
//! A single task owns the `TimerEngine`. Operations arrive as commands
//! with a reply channel, ticks arrive from the interval scheduler, and
//! every applied change is published as a fresh snapshot.

use std::time::Duration;

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    engine::{IntervalScheduler, MessagePicker, Tick, TimerEngine},
    error::TimerError,
    state::{TimerConfig, TimerState},
};

const COMMAND_BUFFER: usize = 32;

/// Operations accepted by the controller task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerCommand {
    /// Configure from raw user input
    Configure(String),
    /// Start, optionally configuring from raw input first
    Start(Option<String>),
    Pause,
    Resume,
    Reset,
    Complete,
    /// Read the current state without changing it
    Snapshot,
}

#[derive(Debug)]
struct Request {
    command: TimerCommand,
    reply: oneshot::Sender<Result<TimerState, TimerError>>,
}

/// Cloneable client for the controller task
#[derive(Debug, Clone)]
pub struct TimerHandle {
    requests: mpsc::Sender<Request>,
    snapshots: watch::Receiver<TimerState>,
}

impl TimerHandle {
    /// Send a command and wait for the resulting state
    pub async fn send(&self, command: TimerCommand) -> Result<TimerState, TimerError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request { command, reply })
            .await
            .map_err(|_| TimerError::TaskStopped)?;
        response.await.map_err(|_| TimerError::TaskStopped)?
    }

    pub async fn configure(&self, input: impl Into<String>) -> Result<TimerState, TimerError> {
        self.send(TimerCommand::Configure(input.into())).await
    }

    pub async fn start(&self) -> Result<TimerState, TimerError> {
        self.send(TimerCommand::Start(None)).await
    }

    pub async fn start_with(&self, input: impl Into<String>) -> Result<TimerState, TimerError> {
        self.send(TimerCommand::Start(Some(input.into()))).await
    }

    pub async fn pause(&self) -> Result<TimerState, TimerError> {
        self.send(TimerCommand::Pause).await
    }

    pub async fn resume(&self) -> Result<TimerState, TimerError> {
        self.send(TimerCommand::Resume).await
    }

    pub async fn reset(&self) -> Result<TimerState, TimerError> {
        self.send(TimerCommand::Reset).await
    }

    pub async fn complete(&self) -> Result<TimerState, TimerError> {
        self.send(TimerCommand::Complete).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> TimerState {
        self.snapshots.borrow().clone()
    }

    /// Watch every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.snapshots.clone()
    }
}

/// Spawn the controller task ticking every `period`
///
/// The task stops once every `TimerHandle` has been dropped.
pub fn spawn_timer_task<P>(picker: P, period: Duration) -> (TimerHandle, JoinHandle<()>)
where
    P: MessagePicker + 'static,
{
    let (request_tx, request_rx) = mpsc::channel(COMMAND_BUFFER);
    let (tick_tx, tick_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(TimerState::new());

    let engine = TimerEngine::new(IntervalScheduler::new(tick_tx, period), picker);
    let task = tokio::spawn(timer_task(engine, request_rx, tick_rx, snapshot_tx));

    let handle = TimerHandle {
        requests: request_tx,
        snapshots: snapshot_rx,
    };
    (handle, task)
}

async fn timer_task<P: MessagePicker>(
    mut engine: TimerEngine<IntervalScheduler, P>,
    mut requests: mpsc::Receiver<Request>,
    mut ticks: mpsc::UnboundedReceiver<Tick>,
    snapshots: watch::Sender<TimerState>,
) {
    info!("Starting timer task");

    loop {
        tokio::select! {
            request = requests.recv() => {
                let Some(Request { command, reply }) = request else {
                    info!("All timer handles dropped, stopping timer task");
                    break;
                };

                debug!("Timer task received command: {:?}", command);
                let result = apply(&mut engine, command);
                match &result {
                    Ok(state) => publish(&snapshots, state),
                    Err(e) => warn!("Timer command rejected: {}", e),
                }

                if reply.send(result).is_err() {
                    debug!("Command caller went away before the reply");
                }
            }

            Some(tick) = ticks.recv() => {
                if !engine.scheduler().accepts(tick) {
                    debug!("Dropping stale tick from source {}", tick.generation);
                    continue;
                }

                match engine.tick() {
                    Ok(state) => publish(&snapshots, state),
                    Err(e) => warn!("Ignoring tick: {}", e),
                }
            }
        }
    }
}

fn apply<P: MessagePicker>(
    engine: &mut TimerEngine<IntervalScheduler, P>,
    command: TimerCommand,
) -> Result<TimerState, TimerError> {
    let state = match command {
        TimerCommand::Configure(input) => engine.configure(input.parse::<TimerConfig>()?)?,
        TimerCommand::Start(None) => engine.start()?,
        TimerCommand::Start(Some(input)) => engine.start_with(input.parse::<TimerConfig>()?)?,
        TimerCommand::Pause => engine.pause()?,
        TimerCommand::Resume => engine.resume()?,
        TimerCommand::Reset => engine.reset()?,
        TimerCommand::Complete => engine.complete()?,
        TimerCommand::Snapshot => engine.state(),
    };
    Ok(state.clone())
}

fn publish(snapshots: &watch::Sender<TimerState>, state: &TimerState) {
    if let Err(e) = snapshots.send(state.clone()) {
        warn!("Failed to publish timer snapshot: {}", e);
    }
}
