//! Background tasks module
//! 
//! This module contains the timer controller task that runs alongside the
//! HTTP server.

pub mod timer_task;

// Re-export main types
pub use timer_task::{spawn_timer_task, TimerCommand, TimerHandle};
