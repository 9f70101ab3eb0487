//! State management module
//! 
//! This module contains the timer snapshot types and the shared
//! application state handed to the HTTP layer.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use timer_state::{
    CompletionReport, Phase, TimerConfig, TimerState, MAX_MINUTES, MIN_MINUTES, SECONDS_PER_MINUTE,
};
