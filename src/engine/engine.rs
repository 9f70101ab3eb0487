//! Countdown state machine
//!
//! Phases move Idle -> Running <-> Paused -> Completed, with reset
//! returning to Idle from anywhere. The scheduler is active exactly while
//! the phase is Running: every phase change cancels the tick source first
//! and only restarts it when the new phase is Running.

use tracing::{debug, info};

use super::{
    messages::{choose_message, MessagePicker},
    scheduler::TickScheduler,
};
use crate::{
    error::{Operation, TimerError},
    state::{CompletionReport, Phase, TimerConfig, TimerState},
};

/// Owns the timer state and drives it through named transitions
#[derive(Debug)]
pub struct TimerEngine<S, P> {
    state: TimerState,
    config: Option<TimerConfig>,
    scheduler: S,
    picker: P,
}

impl<S: TickScheduler, P: MessagePicker> TimerEngine<S, P> {
    /// Create an idle engine with nothing configured
    pub fn new(scheduler: S, picker: P) -> Self {
        Self {
            state: TimerState::new(),
            config: None,
            scheduler,
            picker,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn config(&self) -> Option<TimerConfig> {
        self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Set the duration for the next run
    ///
    /// The timer shows the new duration at full time in the Idle phase.
    /// Rejected while a run is in progress.
    pub fn configure(&mut self, config: TimerConfig) -> Result<&TimerState, TimerError> {
        if matches!(self.state.phase, Phase::Running | Phase::Paused) {
            return Err(TimerError::transition(Operation::Configure, self.state.phase));
        }

        self.config = Some(config);
        self.state.configured_minutes = config.minutes();
        self.state.total_seconds = config.total_seconds();
        self.state.remaining_seconds = config.total_seconds();
        self.state.completion = None;
        self.enter(Phase::Idle);

        info!("Configured timer for {} minutes", config.minutes());
        Ok(&self.state)
    }

    /// Start a run with the configured duration
    pub fn start(&mut self) -> Result<&TimerState, TimerError> {
        if matches!(self.state.phase, Phase::Running | Phase::Paused) {
            return Err(TimerError::transition(Operation::Start, self.state.phase));
        }
        let config = self.config.ok_or(TimerError::NotConfigured)?;

        self.state.configured_minutes = config.minutes();
        self.state.total_seconds = config.total_seconds();
        self.state.remaining_seconds = config.total_seconds();
        self.state.completion = None;
        self.enter(Phase::Running);

        info!("Timer started: {} seconds", self.state.total_seconds);
        Ok(&self.state)
    }

    /// Configure and start in one step
    pub fn start_with(&mut self, config: TimerConfig) -> Result<&TimerState, TimerError> {
        if matches!(self.state.phase, Phase::Running | Phase::Paused) {
            return Err(TimerError::transition(Operation::Start, self.state.phase));
        }
        self.configure(config)?;
        self.start()
    }

    /// Stop ticking without touching the remaining time
    pub fn pause(&mut self) -> Result<&TimerState, TimerError> {
        match self.state.phase {
            Phase::Running => {
                self.enter(Phase::Paused);
                info!("Timer paused with {} seconds left", self.state.remaining_seconds);
            }
            Phase::Paused => debug!("Timer already paused"),
            phase => return Err(TimerError::transition(Operation::Pause, phase)),
        }
        Ok(&self.state)
    }

    /// Continue a paused run
    pub fn resume(&mut self) -> Result<&TimerState, TimerError> {
        match self.state.phase {
            Phase::Paused if self.state.remaining_seconds > 0 => {
                self.enter(Phase::Running);
                info!("Timer resumed with {} seconds left", self.state.remaining_seconds);
            }
            Phase::Running => debug!("Timer already running"),
            phase => return Err(TimerError::transition(Operation::Resume, phase)),
        }
        Ok(&self.state)
    }

    /// Return to Idle with the full configured duration
    pub fn reset(&mut self) -> Result<&TimerState, TimerError> {
        self.state.remaining_seconds = self.state.total_seconds;
        self.state.completion = None;
        self.enter(Phase::Idle);

        info!("Timer reset to {} seconds", self.state.total_seconds);
        Ok(&self.state)
    }

    /// Finish the run early and report the time left
    pub fn complete(&mut self) -> Result<&TimerState, TimerError> {
        match self.state.phase {
            Phase::Running | Phase::Paused => {
                self.finish();
                Ok(&self.state)
            }
            phase => Err(TimerError::transition(Operation::Complete, phase)),
        }
    }

    /// Apply one second of countdown
    pub fn tick(&mut self) -> Result<&TimerState, TimerError> {
        if self.state.phase != Phase::Running {
            return Err(TimerError::transition(Operation::Tick, self.state.phase));
        }

        if self.state.remaining_seconds > 1 {
            self.state.remaining_seconds -= 1;
            debug!("Tick: {} seconds left", self.state.remaining_seconds);
        } else {
            self.state.remaining_seconds = 0;
            info!("Timer expired");
            self.finish();
        }
        Ok(&self.state)
    }

    fn finish(&mut self) {
        let message = choose_message(&mut self.picker);
        let report = CompletionReport::compose(message, self.state.remaining_seconds);
        info!("Timer completed: {}", report.summary);

        self.state.completion = Some(report);
        self.enter(Phase::Completed);
    }

    fn enter(&mut self, phase: Phase) {
        self.scheduler.cancel();
        if phase == Phase::Running {
            self.scheduler.schedule();
        }
        self.state.phase = phase;
        debug_assert_eq!(self.scheduler.is_scheduled(), self.state.phase == Phase::Running);
    }
}
