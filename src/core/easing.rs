use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Stiffness of the critically damped response, expressed per unit duration.
const SMOOTH_OMEGA: f64 = 9.0;

/// Critically damped spring response without overshoot.
///
/// The raw response `1 - (1 + wt) * exp(-wt)` never reaches 1.0 exactly, so it
/// is normalized to land on 1.0 at the end of the configured duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothCurve {
    duration: Duration,
}

impl SmoothCurve {
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self { duration }
    }

    #[must_use]
    pub const fn duration(self) -> Duration {
        self.duration
    }

    /// Eased progress for `elapsed` time since the transition started.
    ///
    /// Zero-length curves jump straight to 1.0.
    #[must_use]
    pub fn progress(self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (raw_response(t) / raw_response(1.0)).clamp(0.0, 1.0)
    }
}

fn raw_response(t: f64) -> f64 {
    let wt = SMOOTH_OMEGA * t;
    1.0 - (1.0 + wt) * (-wt).exp()
}

/// One in-flight "grow in" transition for a revealed sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub started_at: Duration,
    pub curve: SmoothCurve,
}

impl Transition {
    #[must_use]
    pub const fn new(started_at: Duration, curve: SmoothCurve) -> Self {
        Self { started_at, curve }
    }

    #[must_use]
    pub fn progress_at(self, now: Duration) -> f64 {
        match now.checked_sub(self.started_at) {
            Some(elapsed) => self.curve.progress(elapsed),
            None => 0.0,
        }
    }

    #[must_use]
    pub fn is_finished_at(self, now: Duration) -> bool {
        now >= self.started_at + self.curve.duration()
    }
}
