use animated_charts::api::{ChartDemoState, DemoConfig, build_frame};
use animated_charts::core::{ChartKind, cardinal_spline};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn settled_state(kind: ChartKind, triggers: usize) -> ChartDemoState {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    for _ in 0..triggers {
        state.trigger();
    }
    state.select_kind(kind);
    state.advance_by(Duration::from_secs(2));
    state
}

fn bench_frame_build_per_kind(c: &mut Criterion) {
    for kind in ChartKind::ALL {
        let state = settled_state(kind, 10);
        c.bench_function(&format!("frame_build_{}", kind.label().to_lowercase()), |b| {
            b.iter(|| {
                let _ = build_frame(black_box(&state)).expect("frame should build");
            })
        });
    }
}

fn bench_reveal_cycle(c: &mut Criterion) {
    c.bench_function("reveal_cycle_37_points", |b| {
        b.iter(|| {
            let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
            for _ in 0..10 {
                state.trigger();
            }
            for _ in 0..40 {
                state.advance_by(Duration::from_millis(16));
            }
            black_box(state.snapshot());
        })
    });
}

fn bench_cardinal_spline_1k(c: &mut Criterion) {
    let anchors: Vec<(f64, f64)> = (0..1_000)
        .map(|i| {
            let x = f64::from(i);
            (x, (x * 0.1).sin() * 100.0)
        })
        .collect();

    c.bench_function("cardinal_spline_1k", |b| {
        b.iter(|| {
            let _ = cardinal_spline(black_box(&anchors), 0.0, black_box(12));
        })
    });
}

criterion_group!(
    benches,
    bench_frame_build_per_kind,
    bench_reveal_cycle,
    bench_cardinal_spline_1k
);
criterion_main!(benches);
