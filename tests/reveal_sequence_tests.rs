mod support;

use animated_charts::api::{ChartDemoState, DemoConfig};
use animated_charts::core::ChartKind;
use support::{ms, revealed_flags, state_with_points};

#[test]
fn short_sequence_reveals_in_fifty_ms_steps() {
    let mut state = state_with_points(6);
    assert!(state.reveal());
    assert!(state.is_animating());
    assert!(revealed_flags(&state).iter().all(|revealed| !revealed));

    let due: Vec<u64> = state
        .pending_reveals()
        .map(|task| task.due_at.as_millis() as u64)
        .collect();
    assert_eq!(due, vec![0, 50, 100, 150, 200, 250]);

    for index in 0..6 {
        state.advance_to(ms(index as u64 * 50));
        let flags = revealed_flags(&state);
        assert!(flags[..=index].iter().all(|revealed| *revealed));
        assert!(flags[index + 1..].iter().all(|revealed| !revealed));
    }
    assert_eq!(state.pending_reveal_count(), 0);
}

#[test]
fn zero_delay_reveal_waits_for_the_clock() {
    let mut state = state_with_points(3);
    state.reveal();
    assert!(!state.points()[0].revealed);

    state.advance_by(ms(0));
    assert!(state.points()[0].revealed);
    assert!(!state.points()[1].revealed);
}

#[test]
fn points_after_the_sixth_snap_immediately() {
    let mut state = state_with_points(10);
    state.reveal();

    let flags = revealed_flags(&state);
    assert_eq!(
        flags,
        vec![false, false, false, false, false, false, true, true, true, true]
    );
    assert_eq!(state.progress_at(8), 1.0);
    assert_eq!(state.pending_reveal_count(), 6);
}

#[test]
fn selecting_pie_with_seven_samples_staggers_first_six() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    assert_eq!(state.points().len(), 7);

    assert!(state.select_kind(ChartKind::Pie));
    assert!(state.points()[6].revealed);
    assert!(state.points()[..6].iter().all(|point| !point.revealed));

    for index in 0..6 {
        let due = index as u64 * 50;
        if due > 0 {
            state.advance_to(ms(due - 1));
            assert!(
                !state.points()[index].revealed,
                "point {index} revealed before {due}ms"
            );
        }
        state.advance_to(ms(due));
        assert!(state.points()[index].revealed, "point {index} hidden at {due}ms");
    }
}

#[test]
fn reentrant_reveal_is_ignored() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    assert!(state.reveal());
    state.advance_to(ms(60));

    let points_before = state.points().to_vec();
    let pending_before = state.pending_reveal_count();
    assert!(!state.reveal());

    assert_eq!(state.points(), points_before.as_slice());
    assert_eq!(state.pending_reveal_count(), pending_before);
}

#[test]
fn guard_stays_set_after_reveal_completes() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.reveal();
    state.advance_by(ms(1_000));

    assert!(state.is_animating());
    assert!(!state.reveal());
    assert_eq!(state.pending_reveal_count(), 0);
}

#[test]
fn on_appear_starts_reveal_once() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    assert!(state.on_appear());
    assert!(state.has_appeared());
    assert_eq!(state.pending_reveal_count(), 6);

    state.advance_by(ms(1_000));
    state.reset_reveal();
    assert!(!state.on_appear());
    assert_eq!(state.pending_reveal_count(), 0);
    assert!(!state.is_animating());
}

#[test]
fn revealed_points_grow_in_over_the_transition() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.reveal();

    state.advance_to(ms(0));
    assert_eq!(state.progress_at(0), 0.0);
    assert!(state.needs_animation_frame());

    state.advance_to(ms(250));
    let mid = state.progress_at(0);
    assert!(mid > 0.0 && mid < 1.0, "unexpected mid progress {mid}");
    assert!(state.progress_at(1) < mid);
    assert_eq!(state.progress_at(6), 1.0);

    state.advance_to(ms(750));
    for index in 0..7 {
        assert_eq!(state.progress_at(index), 1.0);
    }
    assert!(!state.needs_animation_frame());
}

#[test]
fn reset_cancels_pending_reveals() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.reveal();
    state.advance_to(ms(60));
    assert!(state.points()[1].revealed);

    state.reset_reveal();
    assert_eq!(state.pending_reveal_count(), 0);
    assert!(!state.is_animating());

    state.advance_to(ms(2_000));
    assert!(revealed_flags(&state).iter().all(|revealed| !revealed));
}

#[test]
fn reset_is_idempotent() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.reveal();
    state.advance_to(ms(120));

    state.reset_reveal();
    let once = state.snapshot();
    state.reset_reveal();
    assert_eq!(state.snapshot(), once);
}

#[test]
fn legacy_reset_lets_stale_reveals_pop_back_in() {
    let config = DemoConfig::default().with_cancel_pending_on_reset(false);
    let mut state = ChartDemoState::new(config).expect("state init");
    state.reveal();
    state.advance_to(ms(60));

    state.reset_reveal();
    assert_eq!(state.pending_reveal_count(), 4);
    assert!(revealed_flags(&state).iter().all(|revealed| !revealed));

    state.advance_to(ms(1_000));
    assert_eq!(
        revealed_flags(&state),
        vec![false, false, true, true, true, true, false]
    );
}

#[test]
fn empty_dataset_reveal_is_total() {
    let mut state = state_with_points(0);
    assert!(state.reveal());
    state.advance_by(ms(500));
    assert!(state.points().is_empty());
    assert!(!state.needs_animation_frame());
}

#[test]
fn idle_clock_catch_up_keeps_the_stagger() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.on_appear();
    state.advance_to(ms(2_000));
    assert!(!state.needs_animation_frame());

    // Frame ticks stop while idle; the next action catches the clock up first.
    state.advance_to(ms(5_000));
    state.trigger();
    let due: Vec<u128> = state
        .pending_reveals()
        .map(|task| task.due_at.as_millis())
        .collect();
    assert_eq!(due, vec![5_000, 5_050, 5_100, 5_150, 5_200, 5_250]);

    state.advance_to(ms(5_100));
    assert_eq!(
        revealed_flags(&state)[..6],
        [true, true, true, false, false, false]
    );
    assert!(state.progress_at(2) < 1.0);
}
