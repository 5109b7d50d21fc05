mod chart_demo;
mod demo_config;
mod demo_snapshot;
mod demo_state;
mod invalidation;
mod render_frame_builder;
mod reveal_scheduler;

pub use chart_demo::ChartDemo;
pub use demo_config::DemoConfig;
pub use demo_snapshot::{
    DEMO_SNAPSHOT_JSON_SCHEMA_V1, DemoSnapshot, DemoSnapshotJsonContractV1, PointSnapshot,
};
pub use demo_state::{ChartDemoState, SubscriptionId};
pub use invalidation::{
    InvalidationLevel, InvalidationMask, InvalidationTopic, InvalidationTopics,
};
pub use render_frame_builder::{
    PlotRect, build_frame, build_frame_for_viewport, format_value_label,
};
pub use reveal_scheduler::{RevealScheduler, ScheduledReveal, TaskId};
