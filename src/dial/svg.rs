//! SVG rendering of the dial

use super::{
    face::{face_fill, minute_hand_angle, minute_labels, second_hand_angle},
    geometry::dial_arc,
    ARC_RADIUS, DIAL_CENTER, DIAL_RADIUS,
};
use crate::state::TimerState;

const WEDGE_FILL: &str = "rgba(220, 53, 69, 0.35)";

/// Render the whole dial for a snapshot as a standalone SVG document
pub fn render_dial(state: &TimerState) -> String {
    let (cx, cy) = (DIAL_CENTER.x, DIAL_CENTER.y);
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 100 100">"#,
    );

    svg.push_str(&format!(
        r##"<circle cx="{cx}" cy="{cy}" r="{DIAL_RADIUS}" fill="{}" stroke="#000" stroke-width="2"/>"##,
        face_fill(state.remaining_seconds, state.total_seconds),
    ));

    if let Some(arc) = dial_arc(
        state.remaining_seconds,
        state.total_seconds,
        state.configured_minutes,
        DIAL_CENTER,
        ARC_RADIUS,
    ) {
        svg.push_str(&format!(r#"<path d="{}" fill="{WEDGE_FILL}"/>"#, arc.to_svg()));
    }

    for label in minute_labels(DIAL_CENTER) {
        svg.push_str(&format!(
            r##"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="6" fill="#000">{}</text>"##,
            label.position.x,
            label.position.y + 3.0,
            label.minute,
        ));
    }

    svg.push_str(&format!(
        r##"<line x1="{cx}" y1="{cy}" x2="{cx}" y2="20" stroke="#000" stroke-width="3" stroke-linecap="round" transform="rotate({} {cx} {cy})"/>"##,
        minute_hand_angle(state.remaining_seconds),
    ));
    svg.push_str(&format!(
        r#"<line x1="{cx}" y1="{cy}" x2="{cx}" y2="10" stroke="red" stroke-width="2" stroke-linecap="round" transform="rotate({} {cx} {cy})"/>"#,
        second_hand_angle(state.remaining_seconds),
    ));
    svg.push_str(&format!(r##"<circle cx="{cx}" cy="{cy}" r="3" fill="#000"/>"##));
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    #[test]
    fn idle_dial_has_no_wedge() {
        let svg = render_dial(&TimerState::new());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(!svg.contains("<path"));
        assert_eq!(svg.matches("<text").count(), 12);
    }

    #[test]
    fn running_dial_draws_wedge_and_hands() {
        let state = TimerState {
            phase: Phase::Running,
            total_seconds: 900,
            remaining_seconds: 450,
            configured_minutes: 15,
            completion: None,
        };
        let svg = render_dial(&state);
        assert!(svg.contains("<path d=\"M 50.00 50.00"));
        assert!(svg.contains("rotate(42 50 50)"));
        assert!(svg.contains("rotate(180 50 50)"));
        assert!(svg.contains("fill=\"rgb(255, 255, 255)\""));
    }
}
