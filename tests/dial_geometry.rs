use analog_timer::{
    dial::{
        arc_path, dial_arc, hand_angle_degrees, polar_to_cartesian, DialView, Point, ARC_RADIUS,
        DIAL_CENTER,
    },
    Phase, TimerState,
};

const EPSILON: f64 = 1e-9;

fn running(configured_minutes: u32, remaining_seconds: u32) -> TimerState {
    TimerState {
        phase: Phase::Running,
        total_seconds: configured_minutes * 60,
        remaining_seconds,
        configured_minutes,
        completion: None,
    }
}

#[test]
fn half_elapsed_fifteen_minute_run_points_at_45_degrees() {
    let angle = hand_angle_degrees(450, 900, 15);
    assert!((angle - 45.0).abs() < EPSILON);
}

#[test]
fn hand_sweeps_back_toward_twelve() {
    let full = hand_angle_degrees(900, 900, 15);
    let half = hand_angle_degrees(450, 900, 15);
    let done = hand_angle_degrees(0, 900, 15);
    assert!((full - 90.0).abs() < EPSILON);
    assert!(full > half && half > done);
    assert_eq!(done, 0.0);
}

#[test]
fn no_arc_without_time_or_configuration() {
    assert!(dial_arc(0, 900, 15, DIAL_CENTER, ARC_RADIUS).is_none());
    assert!(dial_arc(30, 0, 0, DIAL_CENTER, ARC_RADIUS).is_none());
    assert!(DialView::from_state(&TimerState::new()).arc_path.is_none());
}

#[test]
fn arc_runs_from_hand_back_to_twelve() {
    let arc = dial_arc(450, 900, 15, DIAL_CENTER, ARC_RADIUS).unwrap();
    let hand = polar_to_cartesian(DIAL_CENTER, ARC_RADIUS, 45.0);
    assert!((arc.start.x - hand.x).abs() < EPSILON);
    assert!((arc.start.y - hand.y).abs() < EPSILON);
    assert!((arc.end.x - 50.0).abs() < EPSILON);
    assert!((arc.end.y - 5.0).abs() < EPSILON);
    assert!(!arc.large_arc);

    let d = arc.to_svg();
    assert!(d.starts_with("M 50.00 50.00 L "));
    assert!(d.contains(" A 45.00 45.00 0 0 0 "));
    assert!(d.ends_with("50.00 5.00 Z"));
}

#[test]
fn long_runs_use_the_large_arc() {
    let arc = dial_arc(2700, 2700, 45, DIAL_CENTER, ARC_RADIUS).unwrap();
    assert!(arc.large_arc);
    let arc = dial_arc(1350, 2700, 45, DIAL_CENTER, ARC_RADIUS).unwrap();
    assert!(!arc.large_arc);
}

#[test]
fn large_arc_flag_normalises_the_span() {
    let center = Point { x: 0.0, y: 0.0 };
    assert!(arc_path(center, 1.0, -90.0, 0.0).large_arc);
    assert!(!arc_path(center, 1.0, 10.0, 0.0).large_arc);
}

#[test]
fn dial_view_collects_everything_for_display() {
    let view = DialView::from_state(&running(15, 450));
    assert!((view.hand_angle - 45.0).abs() < EPSILON);
    assert_eq!(view.minute_hand_angle, 42.0);
    assert_eq!(view.second_hand_angle, 180.0);
    assert!(view.arc_path.is_some());
    assert_eq!(view.face_fill, "rgb(255, 255, 255)");

    let late = DialView::from_state(&running(15, 90));
    assert_eq!(late.face_fill, "rgb(255, 51, 51)");
}
