pub mod chart_kind;
pub mod easing;
pub mod interpolation;
pub mod sample;
pub mod scale;
pub mod types;

pub use chart_kind::ChartKind;
pub use easing::{SmoothCurve, Transition};
pub use interpolation::cardinal_spline;
pub use scale::{LinearScale, MAX_TICKS};
pub use types::{DataPoint, PointId, Viewport, month_label};
