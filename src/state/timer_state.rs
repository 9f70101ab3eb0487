//! Timer state structure and management

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::TimerError, utils::format_remaining};

/// Shortest duration a run may be configured with, in minutes
pub const MIN_MINUTES: u32 = 1;
/// Longest duration a run may be configured with, in minutes
pub const MAX_MINUTES: u32 = 60;
pub const SECONDS_PER_MINUTE: u32 = 60;

/// State machine phase of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Completed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Completed => "completed",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated run duration
///
/// Only whole minutes in `MIN_MINUTES..=MAX_MINUTES` can be represented,
/// so holding a `TimerConfig` is proof the duration passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerConfig {
    minutes: u32,
}

impl TimerConfig {
    /// Validate a minute count
    pub fn from_minutes(minutes: i64) -> Result<Self, TimerError> {
        if (i64::from(MIN_MINUTES)..=i64::from(MAX_MINUTES)).contains(&minutes) {
            Ok(Self { minutes: minutes as u32 })
        } else {
            Err(TimerError::validation(minutes.to_string()))
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn total_seconds(&self) -> u32 {
        self.minutes * SECONDS_PER_MINUTE
    }
}

impl FromStr for TimerConfig {
    type Err = TimerError;

    /// Parse raw user input such as `"15"` or `" 7 "`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let minutes = input
            .trim()
            .parse::<i64>()
            .map_err(|_| TimerError::validation(input))?;
        Self::from_minutes(minutes).map_err(|_| TimerError::validation(input))
    }
}

/// Read-only snapshot of the countdown
///
/// The engine owns the authoritative copy; everything outside it works on
/// clones published after each state change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: Phase,
    /// Duration of the active (or last) run; 0 before anything is configured
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    pub configured_minutes: u32,
    /// Present only in the `Completed` phase
    pub completion: Option<CompletionReport>,
}

impl TimerState {
    /// Create a fresh idle state with nothing configured
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            total_seconds: 0,
            remaining_seconds: 0,
            configured_minutes: 0,
            completion: None,
        }
    }

    /// Check if the countdown is currently ticking
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The composed completion text, if the timer has completed
    pub fn completion_message(&self) -> Option<&str> {
        self.completion.as_ref().map(|report| report.summary.as_str())
    }

    pub fn display_minutes(&self) -> u32 {
        self.remaining_seconds / SECONDS_PER_MINUTE
    }

    pub fn display_seconds(&self) -> u32 {
        self.remaining_seconds % SECONDS_PER_MINUTE
    }

    /// Remaining time formatted for display, e.g. `2分05秒`
    pub fn remaining_display(&self) -> String {
        format_remaining(self.remaining_seconds)
    }
}

/// What the timer reports when a run completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub message: String,
    /// Time left on the clock at the moment of completion
    pub remaining_seconds: u32,
    /// Message and leftover time combined for display
    pub summary: String,
}

impl CompletionReport {
    pub fn compose(message: &str, remaining_seconds: u32) -> Self {
        Self {
            message: message.to_string(),
            remaining_seconds,
            summary: format!("{}（残り{}）", message, format_remaining(remaining_seconds)),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
