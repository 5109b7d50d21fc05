mod support;

use animated_charts::api::{ChartDemoState, DemoConfig};
use support::{ms, revealed_flags};

#[test]
fn appended_batch_starts_hidden() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.on_appear();
    state.advance_by(ms(1_000));

    let appended = state.append_trigger_batch();
    assert_eq!(appended.len(), 3);
    assert_eq!(state.points().len(), 10);
    assert!(state.points()[7..].iter().all(|point| !point.revealed));
    assert_eq!(
        state.points()[7..]
            .iter()
            .map(|point| point.id)
            .collect::<Vec<_>>(),
        appended.to_vec()
    );
}

#[test]
fn trigger_appends_fixed_batch_in_order() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.trigger();

    let tail: Vec<_> = state.points()[7..]
        .iter()
        .map(|point| (point.month.as_str(), point.value))
        .collect();
    assert_eq!(tail, vec![("Feb", 4_500.0), ("Mar", 2_500.0), ("May", 6_500.0)]);
}

#[test]
fn trigger_twice_grows_by_three_each_time() {
    let config = DemoConfig::default().with_animated_prefix_len(64);
    let mut state = ChartDemoState::new(config).expect("state init");
    state.on_appear();
    state.advance_by(ms(1_000));
    let initial = state.points().len();

    state.trigger();
    assert_eq!(state.points().len(), initial + 3);
    assert!(state.points()[initial..].iter().all(|point| !point.revealed));

    state.trigger();
    assert_eq!(state.points().len(), initial + 6);
    assert!(
        state.points()[initial + 3..]
            .iter()
            .all(|point| !point.revealed)
    );

    state.advance_by(ms(2_000));
    assert!(revealed_flags(&state).iter().all(|revealed| *revealed));
}

#[test]
fn trigger_replays_reveal_over_the_larger_list() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.on_appear();
    state.advance_by(ms(1_000));

    state.trigger();
    assert_eq!(state.points().len(), 10);
    assert_eq!(
        revealed_flags(&state),
        vec![false, false, false, false, false, false, true, true, true, true]
    );
    assert_eq!(state.pending_reveal_count(), 6);
}

#[test]
fn point_ids_stay_unique_and_ordered() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    for _ in 0..4 {
        state.trigger();
    }
    let ids: Vec<u64> = state.points().iter().map(|point| point.id.get()).collect();
    assert_eq!(ids, (0..19).collect::<Vec<u64>>());
}
