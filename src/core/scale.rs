use crate::error::{ChartError, ChartResult};

/// Upper bound on the number of ticks a single axis produces.
pub const MAX_TICKS: usize = 1_000;

/// Linear mapping from a value domain onto a pixel range.
///
/// The pixel range may be descending, which is how the value axis maps
/// larger values towards the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` to pixels. Values outside the domain extrapolate linearly.
    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Evenly spaced tick values from domain start to end, inclusive.
    ///
    /// Stops after [`MAX_TICKS`] values.
    #[must_use]
    pub fn ticks(self, step: f64) -> Vec<f64> {
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        let (low, high) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        let mut ticks = Vec::new();
        for index in 0..MAX_TICKS {
            let tick = low + index as f64 * step;
            if tick > high + step * 1e-9 {
                break;
            }
            ticks.push(tick);
        }
        ticks
    }
}
