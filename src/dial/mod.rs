//! Dial rendering module
//!
//! Pure functions turning a timer snapshot into clock-face geometry, plus
//! an SVG renderer built on top of them.

pub mod face;
pub mod geometry;
pub mod svg;

use serde::Serialize;

use crate::state::TimerState;

// Re-export main functions
pub use face::{face_fill, minute_hand_angle, minute_labels, second_hand_angle, MinuteLabel, Rgb};
pub use geometry::{arc_path, dial_arc, hand_angle_degrees, polar_to_cartesian, ArcPath, Point};
pub use svg::render_dial;

/// Centre of the dial in the 100x100 viewBox
pub const DIAL_CENTER: Point = Point { x: 50.0, y: 50.0 };
/// Radius of the dial rim
pub const DIAL_RADIUS: f64 = 48.0;
/// Radius of the remaining-time wedge
pub const ARC_RADIUS: f64 = 45.0;

/// Everything a presentation layer needs to draw the dial
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialView {
    pub hand_angle: f64,
    pub minute_hand_angle: f64,
    pub second_hand_angle: f64,
    /// SVG path data for the remaining-time wedge, absent when there is none
    pub arc_path: Option<String>,
    pub face_fill: String,
}

impl DialView {
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            hand_angle: hand_angle_degrees(
                state.remaining_seconds,
                state.total_seconds,
                state.configured_minutes,
            ),
            minute_hand_angle: minute_hand_angle(state.remaining_seconds),
            second_hand_angle: second_hand_angle(state.remaining_seconds),
            arc_path: dial_arc(
                state.remaining_seconds,
                state.total_seconds,
                state.configured_minutes,
                DIAL_CENTER,
                ARC_RADIUS,
            )
            .map(|arc| arc.to_svg()),
            face_fill: face_fill(state.remaining_seconds, state.total_seconds).to_string(),
        }
    }
}
