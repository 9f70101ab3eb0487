//! Countdown engine module
//! 
//! This module contains the timer state machine and the collaborators it
//! is driven by: the tick scheduler and the completion message picker.

pub mod engine;
pub mod messages;
pub mod scheduler;

// Re-export main types
pub use engine::TimerEngine;
pub use messages::{
    choose_message, MessagePicker, RandomPicker, SequencePicker, ENCOURAGEMENTS,
};
pub use scheduler::{IntervalScheduler, ManualScheduler, Tick, TickScheduler, TICK_PERIOD};
