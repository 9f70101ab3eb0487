//! Error taxonomy for timer operations
//!
//! No error here is fatal: every rejected operation leaves the timer
//! state exactly as it was.

use std::fmt;

use thiserror::Error;

use crate::state::{Phase, MAX_MINUTES, MIN_MINUTES};

/// Named operations of the timer state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Configure,
    Start,
    Pause,
    Resume,
    Reset,
    Complete,
    Tick,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Configure => "configure",
            Operation::Start => "start",
            Operation::Pause => "pause",
            Operation::Resume => "resume",
            Operation::Reset => "reset",
            Operation::Complete => "complete",
            Operation::Tick => "tick",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by the timer engine and its controller task
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("invalid duration {input:?}: enter a whole number of minutes from {min} to {max}", min = MIN_MINUTES, max = MAX_MINUTES)]
    Validation { input: String },
    #[error("no duration has been configured")]
    NotConfigured,
    #[error("cannot {operation} while the timer is {phase}")]
    InvalidTransition { operation: Operation, phase: Phase },
    #[error("timer task is no longer running")]
    TaskStopped,
}

impl TimerError {
    pub(crate) fn validation(input: impl Into<String>) -> Self {
        TimerError::Validation { input: input.into() }
    }

    pub(crate) fn transition(operation: Operation, phase: Phase) -> Self {
        TimerError::InvalidTransition { operation, phase }
    }

    /// True for errors caused by bad user input rather than timing
    pub fn is_validation(&self) -> bool {
        matches!(self, TimerError::Validation { .. } | TimerError::NotConfigured)
    }
}
