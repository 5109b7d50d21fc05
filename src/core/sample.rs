use chrono::NaiveDate;
use smallvec::SmallVec;
use tracing::warn;

/// Calendar date and value for one hard-coded sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSpec {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub value: f64,
}

impl SampleSpec {
    #[must_use]
    pub const fn new(day: u32, month: u32, year: i32, value: f64) -> Self {
        Self {
            day,
            month,
            year,
            value,
        }
    }

    #[must_use]
    pub fn date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

const INITIAL_SAMPLES: [SampleSpec; 7] = [
    SampleSpec::new(1, 1, 2024, 4_200.0),
    SampleSpec::new(1, 2, 2024, 7_400.0),
    SampleSpec::new(1, 3, 2024, 5_600.0),
    SampleSpec::new(1, 4, 2024, 9_100.0),
    SampleSpec::new(1, 5, 2024, 6_300.0),
    SampleSpec::new(1, 6, 2024, 11_200.0),
    SampleSpec::new(1, 7, 2024, 8_300.0),
];

const TRIGGER_SAMPLES: [SampleSpec; 3] = [
    SampleSpec::new(1, 2, 2024, 4_500.0),
    SampleSpec::new(1, 3, 2024, 2_500.0),
    SampleSpec::new(1, 5, 2024, 6_500.0),
];

/// Dataset shown when the demo first appears.
#[must_use]
pub fn initial_samples() -> Vec<(NaiveDate, f64)> {
    resolve(&INITIAL_SAMPLES).collect()
}

/// The three samples appended by the toolbar trigger.
#[must_use]
pub fn trigger_batch() -> SmallVec<[(NaiveDate, f64); 3]> {
    resolve(&TRIGGER_SAMPLES).collect()
}

fn resolve(specs: &[SampleSpec]) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
    specs.iter().filter_map(|spec| match spec.date() {
        Some(date) => Some((date, spec.value)),
        None => {
            warn!(?spec, "skipping sample with invalid calendar date");
            None
        }
    })
}
