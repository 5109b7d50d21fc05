mod support;

use animated_charts::api::{ChartDemoState, DemoConfig, build_frame, build_frame_for_viewport};
use animated_charts::core::{ChartKind, Viewport};
use animated_charts::error::ChartError;
use approx::assert_relative_eq;
use std::f64::consts::{FRAC_PI_2, TAU};
use support::{ms, state_with_points};

const SAMPLE_COUNT: usize = 7;
const VALUE_TICKS: usize = 5;

fn settled(kind: ChartKind) -> ChartDemoState {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.on_appear();
    state.select_kind(kind);
    state.advance_by(ms(2_000));
    state
}

#[test]
fn settled_bar_frame_has_bars_axes_and_legend() {
    let state = settled(ChartKind::Bar);
    let frame = build_frame(&state).expect("frame");

    assert!(frame.background.is_some());
    assert_eq!(frame.rects.len(), SAMPLE_COUNT * 2);
    assert_eq!(frame.lines.len(), VALUE_TICKS);
    assert_eq!(frame.texts.len(), VALUE_TICKS + SAMPLE_COUNT * 2);
    assert!(frame.sectors.is_empty());

    let jan = frame.rects[0];
    let apr = frame.rects[3];
    assert_relative_eq!(jan.height / apr.height, 4_200.0 / 9_100.0, epsilon = 1e-9);
    assert_relative_eq!(jan.y + jan.height, apr.y + apr.height, epsilon = 1e-9);
    assert_relative_eq!(jan.fill_color.alpha, 1.0);
}

#[test]
fn hidden_points_draw_no_marks() {
    let state = ChartDemoState::new(DemoConfig::default()).expect("state init");

    let bar = build_frame(&state).expect("bar frame");
    assert_eq!(bar.rects.len(), SAMPLE_COUNT);

    let mut state = state;
    state.select_kind(ChartKind::Pie);
    state.reset_reveal();
    let pie = build_frame(&state).expect("pie frame");
    assert!(pie.sectors.is_empty());
}

#[test]
fn pie_sectors_cover_the_circle_minus_insets() {
    let state = settled(ChartKind::Pie);
    let config = *state.config();
    let frame = build_frame(&state).expect("frame");

    assert_eq!(frame.sectors.len(), SAMPLE_COUNT);
    let inset = config.pie_angular_inset_deg.to_radians();
    let swept: f64 = frame.sectors.iter().map(|sector| sector.sweep()).sum();
    assert_relative_eq!(swept + inset * SAMPLE_COUNT as f64, TAU, epsilon = 1e-9);
    assert_relative_eq!(frame.sectors[0].start_angle, -FRAC_PI_2 + inset / 2.0);

    for sector in &frame.sectors {
        assert_relative_eq!(
            sector.inner_radius,
            sector.outer_radius * config.pie_inner_radius_ratio
        );
    }
}

#[test]
fn pie_shares_follow_values() {
    let state = settled(ChartKind::Pie);
    let inset = state.config().pie_angular_inset_deg.to_radians();
    let frame = build_frame(&state).expect("frame");

    let total: f64 = state.points().iter().map(|point| point.value).sum();
    for (sector, point) in frame.sectors.iter().zip(state.points()) {
        assert_relative_eq!(
            sector.sweep() + inset,
            point.value / total * TAU,
            epsilon = 1e-9
        );
    }
}

#[test]
fn settled_line_frame_samples_every_span() {
    let state = settled(ChartKind::Line);
    let samples = state.config().line_samples_per_segment;
    let frame = build_frame(&state).expect("frame");

    assert_eq!(frame.lines.len(), VALUE_TICKS + (SAMPLE_COUNT - 1) * samples);
    assert!(frame.rects.is_empty());
    assert_eq!(frame.texts.len(), VALUE_TICKS + SAMPLE_COUNT);
}

#[test]
fn line_spans_appear_once_both_ends_are_visible() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.select_kind(ChartKind::Line);
    state.advance_to(ms(100));
    let samples = state.config().line_samples_per_segment;

    let frame = build_frame(&state).expect("frame");
    assert_eq!(frame.lines.len(), VALUE_TICKS + samples);
}

#[test]
fn shared_months_stack_bars() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.trigger();
    state.advance_by(ms(2_000));

    let frame = build_frame(&state).expect("frame");
    assert_eq!(frame.rects.len(), 10 + SAMPLE_COUNT);

    let feb_first = frame.rects[1];
    let feb_second = frame.rects[7];
    assert_relative_eq!(feb_second.x, feb_first.x);
    assert_relative_eq!(feb_second.y + feb_second.height, feb_first.y, epsilon = 1e-9);
}

#[test]
fn mid_transition_marks_are_partially_drawn() {
    let mut state = state_with_points(1);
    state.reveal();
    state.advance_to(ms(200));

    let progress = state.progress_at(0);
    assert!(progress > 0.0 && progress < 1.0);
    let frame = build_frame(&state).expect("frame");
    assert_relative_eq!(frame.rects[0].fill_color.alpha, progress);
}

#[test]
fn frames_adapt_to_host_viewport() {
    let state = settled(ChartKind::Bar);
    let wide = build_frame_for_viewport(&state, Viewport::new(800, 250)).expect("wide frame");
    let narrow = build_frame(&state).expect("default frame");
    assert!(wide.rects[0].width > narrow.rects[0].width);

    let tiny = build_frame_for_viewport(&state, Viewport::new(20, 20)).expect("tiny frame");
    assert!(tiny.is_empty());

    let err = build_frame_for_viewport(&state, Viewport::new(0, 250)).expect_err("zero width");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, .. }));
}
