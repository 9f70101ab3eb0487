//! Clock-face details: hands, minute labels and the urgency tint

use std::fmt;

use serde::Serialize;

use super::geometry::{polar_to_cartesian, Point, DEGREES_PER_MINUTE};

/// Distance of the minute labels from the centre
pub const LABEL_RADIUS: f64 = 42.0;

/// Minute hand: whole minutes left, one minute mark each
pub fn minute_hand_angle(remaining_seconds: u32) -> f64 {
    f64::from(remaining_seconds / 60) * DEGREES_PER_MINUTE
}

/// Second hand: seconds within the current minute
pub fn second_hand_angle(remaining_seconds: u32) -> f64 {
    f64::from(remaining_seconds % 60) * DEGREES_PER_MINUTE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Face colour: white for the first half of a run, then fading to red
pub fn face_fill(remaining_seconds: u32, total_seconds: u32) -> Rgb {
    if total_seconds == 0 {
        return Rgb::WHITE;
    }
    let half = f64::from(total_seconds) / 2.0;
    let remaining = f64::from(remaining_seconds);
    if remaining > half {
        return Rgb::WHITE;
    }
    let fade = (255.0 * (remaining / half)).floor().clamp(0.0, 255.0) as u8;
    Rgb(255, fade, fade)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinuteLabel {
    pub minute: u32,
    pub position: Point,
}

/// The twelve labels 0, 5, ... 55 around the dial
pub fn minute_labels(center: Point) -> Vec<MinuteLabel> {
    (0..12)
        .map(|i| {
            let minute = i * 5;
            MinuteLabel {
                minute,
                position: polar_to_cartesian(
                    center,
                    LABEL_RADIUS,
                    f64::from(minute) * DEGREES_PER_MINUTE,
                ),
            }
        })
        .collect()
}
