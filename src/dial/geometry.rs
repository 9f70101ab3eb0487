//! Time-to-angle mapping and arc construction
//!
//! Angles are in degrees with 0 at 12 o'clock increasing clockwise, the
//! way a clock face reads. Conversion to screen coordinates subtracts 90
//! degrees so that 0 points up in a y-down coordinate system.

use serde::Serialize;

/// One minute on a 60-minute dial
pub const DEGREES_PER_MINUTE: f64 = 6.0;
/// Widest wedge a single SVG arc command can draw
pub const MAX_SWEEP_DEGREES: f64 = 359.99;
/// SVG sweep flag for the counter-clockwise direction
pub const SWEEP_COUNTER_CLOCKWISE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Angle of the remaining-time hand
///
/// A run of `configured_minutes` occupies that many minutes of the dial
/// and shrinks back toward 12 o'clock as time runs out.
pub fn hand_angle_degrees(remaining_seconds: u32, total_seconds: u32, configured_minutes: u32) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    f64::from(configured_minutes)
        * DEGREES_PER_MINUTE
        * (f64::from(remaining_seconds) / f64::from(total_seconds))
}

pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// A closed wedge from the centre out to an arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcPath {
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

impl ArcPath {
    /// SVG path data: centre, line to arc start, arc to arc end, close
    pub fn to_svg(&self) -> String {
        format!(
            "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} {} {:.2} {:.2} Z",
            self.center.x,
            self.center.y,
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            SWEEP_COUNTER_CLOCKWISE,
            self.end.x,
            self.end.y,
        )
    }
}

/// Build the wedge swept counter-clockwise from `start_angle` to `end_angle`
pub fn arc_path(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    // A full turn would put both endpoints on the same spot and draw nothing
    let start_angle = if start_angle - end_angle >= 360.0 {
        end_angle + MAX_SWEEP_DEGREES
    } else {
        start_angle
    };
    let span = (start_angle - end_angle).rem_euclid(360.0);

    ArcPath {
        center,
        radius,
        start: polar_to_cartesian(center, radius, start_angle),
        end: polar_to_cartesian(center, radius, end_angle),
        large_arc: span > 180.0,
    }
}

/// The remaining-time wedge from the hand back to 12 o'clock
///
/// Returns `None` when nothing is configured or no time remains.
pub fn dial_arc(
    remaining_seconds: u32,
    total_seconds: u32,
    configured_minutes: u32,
    center: Point,
    radius: f64,
) -> Option<ArcPath> {
    if configured_minutes == 0 || remaining_seconds == 0 {
        return None;
    }
    let hand = hand_angle_degrees(remaining_seconds, total_seconds, configured_minutes);
    Some(arc_path(center, radius, hand, 0.0))
}
