use animated_charts::api::{
    ChartDemoState, DEMO_SNAPSHOT_JSON_SCHEMA_V1, DemoConfig, DemoSnapshot,
};
use animated_charts::core::{ChartKind, Viewport};
use animated_charts::error::ChartError;
use std::time::Duration;

#[test]
fn empty_config_document_uses_defaults() {
    let config = DemoConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config, DemoConfig::default());
    assert_eq!(config.stagger_step_ms, 50);
    assert_eq!(config.animated_prefix_len, 6);
    assert_eq!(config.value_domain_max, 12_000.0);
    assert!(config.cancel_pending_on_reset);
}

#[test]
fn partial_config_document_overrides_fields() {
    let config = DemoConfig::from_json_str(
        r#"{ "stagger_step_ms": 80, "viewport": { "width": 640, "height": 300 } }"#,
    )
    .expect("partial config");
    assert_eq!(config.stagger_step_ms, 80);
    assert_eq!(config.viewport, Viewport::new(640, 300));
    assert_eq!(config.transition_duration_ms, 500);
}

#[test]
fn invalid_config_values_are_rejected() {
    let err = DemoConfig::from_json_str(r#"{ "pie_inner_radius_ratio": 1.0 }"#)
        .expect_err("ratio must be < 1");
    assert!(matches!(
        err,
        ChartError::InvalidConfig {
            field: "pie_inner_radius_ratio",
            ..
        }
    ));

    let err = ChartDemoState::new(DemoConfig::default().with_stagger_step_ms(0))
        .expect_err("zero step");
    assert!(matches!(
        err,
        ChartError::InvalidConfig {
            field: "stagger_step_ms",
            ..
        }
    ));

    let err = DemoConfig::from_json_str("not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn dense_value_ticks_are_rejected() {
    let err = DemoConfig::from_json_str(r#"{ "value_tick_step": 0.001 }"#)
        .expect_err("too many ticks");
    assert!(matches!(
        err,
        ChartError::InvalidConfig {
            field: "value_tick_step",
            ..
        }
    ));

    let config = DemoConfig::from_json_str(r#"{ "value_tick_step": 15.0 }"#)
        .expect("eight hundred steps");
    assert_eq!(config.value_tick_step, 15.0);
}

#[test]
fn custom_stagger_step_drives_delays() {
    let config = DemoConfig::default().with_stagger_step_ms(80);
    let mut state = ChartDemoState::new(config).expect("state init");
    state.reveal();
    let due: Vec<u128> = state
        .pending_reveals()
        .map(|task| task.due_at.as_millis())
        .collect();
    assert_eq!(due, vec![0, 80, 160, 240, 320, 400]);
}

#[test]
fn snapshot_contract_parses_wrapped_and_bare_payloads() {
    let mut state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    state.select_kind(ChartKind::Pie);
    state.advance_by(Duration::from_millis(120));
    let snapshot = state.snapshot();

    assert_eq!(snapshot.kind, ChartKind::Pie);
    assert_eq!(snapshot.clock_ms, 120);
    assert_eq!(snapshot.revealed_count(), 4);
    assert_eq!(snapshot.pending_reveals, 3);

    let wrapped = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(wrapped.contains(&format!(
        "\"schema_version\": {DEMO_SNAPSHOT_JSON_SCHEMA_V1}"
    )));
    assert_eq!(
        DemoSnapshot::from_json_compat_str(&wrapped).expect("wrapped"),
        snapshot
    );

    let bare = serde_json::to_string(&snapshot).expect("bare serialize");
    assert_eq!(
        DemoSnapshot::from_json_compat_str(&bare).expect("bare"),
        snapshot
    );
}

#[test]
fn snapshot_contract_rejects_unknown_schema() {
    let state = ChartDemoState::new(DemoConfig::default()).expect("state init");
    let wrapped = state
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");

    let err = DemoSnapshot::from_json_compat_str(&wrapped).expect_err("unsupported");
    assert!(err.to_string().contains("unsupported snapshot schema version"));
}
