use analog_timer::{
    engine::{ManualScheduler, SequencePicker, TickScheduler, ENCOURAGEMENTS},
    Operation, Phase, TimerConfig, TimerEngine, TimerError,
};

type Engine = TimerEngine<ManualScheduler, SequencePicker>;

fn engine_with_picks(picks: Vec<usize>) -> Engine {
    TimerEngine::new(ManualScheduler::new(), SequencePicker::new(picks))
}

fn started(minutes: i64) -> Engine {
    let mut engine = engine_with_picks(vec![0]);
    engine
        .start_with(TimerConfig::from_minutes(minutes).unwrap())
        .unwrap();
    engine
}

#[test]
fn start_initialises_a_full_run() {
    let engine = started(10);
    let state = engine.state();
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.total_seconds, 600);
    assert_eq!(state.remaining_seconds, 600);
    assert_eq!(state.completion, None);
    assert!(engine.scheduler().is_scheduled());
    assert_eq!(engine.scheduler().schedule_count(), 1);
}

#[test]
fn invalid_input_leaves_the_engine_untouched() {
    let mut engine = engine_with_picks(vec![0]);
    for input in ["0", "61", "-1", "2.5", "abc"] {
        let err = input.parse::<TimerConfig>().unwrap_err();
        assert!(matches!(err, TimerError::Validation { .. }));
    }
    assert_eq!(engine.start().unwrap_err(), TimerError::NotConfigured);
    assert_eq!(engine.state().phase, Phase::Idle);
    assert_eq!(engine.state().total_seconds, 0);
}

#[test]
fn each_tick_removes_exactly_one_second() {
    let mut engine = started(1);
    for expected in (1..60).rev() {
        assert_eq!(engine.tick().unwrap().remaining_seconds, expected);
        assert_eq!(engine.state().phase, Phase::Running);
    }
}

#[test]
fn last_tick_completes_and_stops_the_schedule() {
    let mut engine = started(1);
    for _ in 0..59 {
        engine.tick().unwrap();
    }
    assert_eq!(engine.state().remaining_seconds, 1);

    let state = engine.tick().unwrap();
    assert_eq!(state.remaining_seconds, 0);
    assert_eq!(state.phase, Phase::Completed);
    assert!(!engine.scheduler().is_scheduled());

    assert_eq!(
        engine.tick().unwrap_err(),
        TimerError::InvalidTransition { operation: Operation::Tick, phase: Phase::Completed }
    );
    assert_eq!(engine.state().remaining_seconds, 0);
}

#[test]
fn pause_twice_is_the_same_as_once() {
    let mut engine = started(3);
    engine.tick().unwrap();

    let once = engine.pause().unwrap().clone();
    let twice = engine.pause().unwrap().clone();
    assert_eq!(once, twice);
    assert_eq!(twice.phase, Phase::Paused);
    assert_eq!(twice.remaining_seconds, 179);
    assert_eq!(engine.scheduler().cancel_count(), 1);
    assert!(!engine.scheduler().is_scheduled());
}

#[test]
fn resume_while_running_is_a_no_op() {
    let mut engine = started(3);
    engine.resume().unwrap();
    assert_eq!(engine.state().phase, Phase::Running);
    assert_eq!(engine.scheduler().schedule_count(), 1);
}

#[test]
fn pause_and_resume_keep_the_remaining_time() {
    let mut engine = started(2);
    engine.tick().unwrap();
    engine.tick().unwrap();
    engine.pause().unwrap();
    assert!(engine.tick().is_err());

    let state = engine.resume().unwrap();
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.remaining_seconds, 118);
    assert!(engine.scheduler().is_scheduled());
    assert_eq!(engine.scheduler().schedule_count(), 2);
}

#[test]
fn resume_is_rejected_outside_paused() {
    let mut engine = started(1);
    engine.complete().unwrap();
    assert_eq!(
        engine.resume().unwrap_err(),
        TimerError::InvalidTransition { operation: Operation::Resume, phase: Phase::Completed }
    );

    let mut idle = engine_with_picks(vec![0]);
    assert!(idle.resume().is_err());
    assert!(idle.pause().is_err());
    assert!(idle.complete().is_err());
}

#[test]
fn manual_completion_reports_time_left() {
    let mut engine = engine_with_picks(vec![3]);
    engine
        .start_with(TimerConfig::from_minutes(3).unwrap())
        .unwrap();
    for _ in 0..55 {
        engine.tick().unwrap();
    }
    assert_eq!(engine.state().remaining_seconds, 125);

    let state = engine.complete().unwrap();
    assert_eq!(state.phase, Phase::Completed);
    assert_eq!(state.remaining_seconds, 125);

    let report = state.completion.as_ref().unwrap();
    assert_eq!(report.message, ENCOURAGEMENTS[3]);
    assert_eq!(report.remaining_seconds, 125);
    assert!(report.summary.contains("2分05秒"));
    assert_eq!(state.completion_message(), Some(report.summary.as_str()));
    assert!(!engine.scheduler().is_scheduled());
}

#[test]
fn manual_completion_from_paused() {
    let mut engine = started(5);
    engine.pause().unwrap();
    let state = engine.complete().unwrap();
    assert_eq!(state.phase, Phase::Completed);
    assert!(state.completion.is_some());
}

#[test]
fn reset_restores_the_full_duration() {
    let mut engine = started(10);
    for _ in 0..7 {
        engine.tick().unwrap();
    }

    let state = engine.reset().unwrap();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.remaining_seconds, 600);
    assert_eq!(state.total_seconds, 600);
    assert_eq!(state.completion, None);
    assert!(!engine.scheduler().is_scheduled());
}

#[test]
fn reset_after_completion_clears_the_message() {
    let mut engine = started(1);
    engine.complete().unwrap();
    let state = engine.reset().unwrap();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.remaining_seconds, 60);
    assert_eq!(state.completion_message(), None);
}

#[test]
fn restart_after_reset_reuses_the_configuration() {
    let mut engine = started(4);
    engine.tick().unwrap();
    engine.reset().unwrap();

    let state = engine.start().unwrap();
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.remaining_seconds, 240);
}

#[test]
fn scheduler_is_live_only_while_running() {
    let mut engine = started(2);
    let checks: [fn(&mut Engine) -> bool; 5] = [
        |e| e.pause().is_ok(),
        |e| e.resume().is_ok(),
        |e| e.tick().is_ok(),
        |e| e.complete().is_ok(),
        |e| e.reset().is_ok(),
    ];
    for step in checks {
        assert!(step(&mut engine));
        assert_eq!(
            engine.scheduler().is_scheduled(),
            engine.state().phase == Phase::Running
        );
    }
}
