//! Main application state management

use std::{sync::Mutex, time::Instant};

use chrono::{DateTime, Utc};
use tracing::info;

use super::TimerState;
use crate::{
    error::TimerError,
    tasks::{TimerCommand, TimerHandle},
    utils::format_uptime,
};

/// Shared state handed to every HTTP handler
#[derive(Debug)]
pub struct AppState {
    /// Client for the timer controller task
    pub timer: TimerHandle,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
}

impl AppState {
    /// Create a new AppState around a running timer task
    pub fn new(port: u16, host: String, timer: TimerHandle) -> Self {
        Self {
            timer,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
        }
    }

    /// Run a timer command and record it as the last action when it succeeds
    pub async fn dispatch(&self, action: &str, command: TimerCommand) -> Result<TimerState, TimerError> {
        let state = self.timer.send(command).await?;
        info!("Action {} applied, timer is {}", action, state.phase);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(state)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> TimerState {
        self.timer.snapshot()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
