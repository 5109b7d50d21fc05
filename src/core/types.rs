use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Size as the signed pixel pair Cairo and GTK expect.
    pub fn surface_size(self) -> ChartResult<(i32, i32)> {
        match (i32::try_from(self.width), i32::try_from(self.height)) {
            (Ok(width), Ok(height)) if self.is_valid() => Ok((width, height)),
            _ => Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            }),
        }
    }
}

/// Stable identity of one sample, assigned in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(u64);

impl PointId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// One chart sample.
///
/// `revealed` drives the animated geometry: hidden samples render with zero
/// magnitude and zero opacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: PointId,
    pub date: NaiveDate,
    pub month: String,
    pub value: f64,
    pub revealed: bool,
}

impl DataPoint {
    /// Creates an unrevealed sample labelled with the abbreviated month of `date`.
    #[must_use]
    pub fn new(id: PointId, date: NaiveDate, value: f64) -> Self {
        Self {
            id,
            date,
            month: month_label(date),
            value,
            revealed: false,
        }
    }
}

/// Abbreviated English month name, e.g. `"Jan"`.
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}
