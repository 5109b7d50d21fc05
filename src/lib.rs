//! animated-charts: staggered reveal animation for bar, line and pie charts.
//!
//! The crate keeps a strict split between the demo state machine (`api`),
//! pure chart math (`core`) and drawing backends (`render`). The optional
//! GTK4 shell lives in `platform_gtk`.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartDemo, ChartDemoState, DemoConfig};
pub use core::{ChartKind, DataPoint};
pub use error::{ChartError, ChartResult};
