#![allow(dead_code)]

use animated_charts::api::{ChartDemoState, DemoConfig};
use chrono::{Days, NaiveDate};
use std::time::Duration;

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// `count` samples on consecutive days starting 2024-01-01.
pub fn daily_samples(count: usize) -> Vec<(NaiveDate, f64)> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date");
    (0..count)
        .map(|index| {
            let date = start
                .checked_add_days(Days::new(index as u64))
                .expect("date in range");
            (date, 1_000.0 + index as f64 * 100.0)
        })
        .collect()
}

pub fn state_with_points(count: usize) -> ChartDemoState {
    ChartDemoState::with_samples(DemoConfig::default(), daily_samples(count)).expect("state init")
}

pub fn revealed_flags(state: &ChartDemoState) -> Vec<bool> {
    state.points().iter().map(|point| point.revealed).collect()
}
