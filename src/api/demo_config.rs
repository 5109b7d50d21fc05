use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{MAX_TICKS, SmoothCurve, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public demo bootstrap configuration.
///
/// Every field has a default, so a JSON document only needs the values it
/// overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Delay added per ordinal position when staggering reveals.
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u64,
    /// Number of leading samples that animate; the rest snap into place.
    #[serde(default = "default_animated_prefix_len")]
    pub animated_prefix_len: usize,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
    #[serde(default = "default_value_domain_max")]
    pub value_domain_max: f64,
    #[serde(default = "default_value_tick_step")]
    pub value_tick_step: f64,
    /// Drop pending reveals when the animation is reset. Disabling this
    /// keeps stale reveals alive, so a reset sample may pop back in later.
    #[serde(default = "default_cancel_pending_on_reset")]
    pub cancel_pending_on_reset: bool,
    #[serde(default = "default_pie_inner_radius_ratio")]
    pub pie_inner_radius_ratio: f64,
    #[serde(default = "default_pie_angular_inset_deg")]
    pub pie_angular_inset_deg: f64,
    #[serde(default = "default_line_samples_per_segment")]
    pub line_samples_per_segment: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            stagger_step_ms: default_stagger_step_ms(),
            animated_prefix_len: default_animated_prefix_len(),
            transition_duration_ms: default_transition_duration_ms(),
            value_domain_max: default_value_domain_max(),
            value_tick_step: default_value_tick_step(),
            cancel_pending_on_reset: default_cancel_pending_on_reset(),
            pie_inner_radius_ratio: default_pie_inner_radius_ratio(),
            pie_angular_inset_deg: default_pie_angular_inset_deg(),
            line_samples_per_segment: default_line_samples_per_segment(),
        }
    }
}

impl DemoConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_stagger_step_ms(mut self, step_ms: u64) -> Self {
        self.stagger_step_ms = step_ms;
        self
    }

    #[must_use]
    pub fn with_animated_prefix_len(mut self, len: usize) -> Self {
        self.animated_prefix_len = len;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_cancel_pending_on_reset(mut self, cancel: bool) -> Self {
        self.cancel_pending_on_reset = cancel;
        self
    }

    #[must_use]
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    #[must_use]
    pub fn transition_curve(&self) -> SmoothCurve {
        SmoothCurve::new(Duration::from_millis(self.transition_duration_ms))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.stagger_step_ms == 0 {
            return Err(ChartError::invalid_config(
                "stagger_step_ms",
                "must be > 0",
            ));
        }
        if !self.value_domain_max.is_finite() || self.value_domain_max <= 0.0 {
            return Err(ChartError::invalid_config(
                "value_domain_max",
                "must be finite and > 0",
            ));
        }
        if !self.value_tick_step.is_finite() || self.value_tick_step <= 0.0 {
            return Err(ChartError::invalid_config(
                "value_tick_step",
                "must be finite and > 0",
            ));
        }
        if self.value_domain_max / self.value_tick_step >= MAX_TICKS as f64 {
            return Err(ChartError::invalid_config(
                "value_tick_step",
                format!("must leave fewer than {MAX_TICKS} steps over the value domain"),
            ));
        }
        if !self.pie_inner_radius_ratio.is_finite()
            || !(0.0..1.0).contains(&self.pie_inner_radius_ratio)
        {
            return Err(ChartError::invalid_config(
                "pie_inner_radius_ratio",
                "must be in [0, 1)",
            ));
        }
        if !self.pie_angular_inset_deg.is_finite() || self.pie_angular_inset_deg < 0.0 {
            return Err(ChartError::invalid_config(
                "pie_angular_inset_deg",
                "must be finite and >= 0",
            ));
        }
        if self.line_samples_per_segment == 0 {
            return Err(ChartError::invalid_config(
                "line_samples_per_segment",
                "must be > 0",
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(360, 250)
}

fn default_stagger_step_ms() -> u64 {
    50
}

fn default_animated_prefix_len() -> usize {
    6
}

fn default_transition_duration_ms() -> u64 {
    500
}

fn default_value_domain_max() -> f64 {
    12_000.0
}

fn default_value_tick_step() -> f64 {
    3_000.0
}

fn default_cancel_pending_on_reset() -> bool {
    true
}

fn default_pie_inner_radius_ratio() -> f64 {
    0.5
}

fn default_pie_angular_inset_deg() -> f64 {
    1.5
}

fn default_line_samples_per_segment() -> usize {
    12
}
