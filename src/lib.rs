//! Analog Timer - A countdown timer rendered as an analog clock dial
//! 
//! This library provides the countdown state machine, the tick scheduling
//! that drives it, the dial geometry used to draw it, and a small HTTP
//! surface exposing both.

pub mod config;
pub mod error;
pub mod state;
pub mod engine;
pub mod dial;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{Operation, TimerError};
pub use state::{AppState, Phase, TimerConfig, TimerState};
pub use engine::TimerEngine;
pub use api::create_router;
pub use tasks::{spawn_timer_task, TimerHandle};
pub use utils::signals::shutdown_signal;
