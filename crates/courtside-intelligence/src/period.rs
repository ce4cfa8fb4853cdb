// ABOUTME: Period windowing for insight generation over weekly and monthly windows
// ABOUTME: Computes half-open [start, now) intervals and filters records into them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Period windowing
//!
//! A window is the half-open interval `[start, end)` where `end` is the
//! evaluation time. Weekly windows go back seven days; monthly windows go
//! back one calendar month, clamping to the last valid day (March 31 becomes
//! the last day of February).

use chrono::{DateTime, Duration, Months, Utc};
use courtside_core::constants::time::DAYS_PER_WEEK;
use courtside_core::models::{Period, Timestamped};
use serde::{Deserialize, Serialize};

/// Half-open time window for one reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// Period the window was derived from
    pub period: Period,
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Exclusive upper bound (evaluation time)
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    /// Window for `period` ending at `now`
    #[must_use]
    pub fn ending_at(period: Period, now: DateTime<Utc>) -> Self {
        let (start, end) = window(period, now);
        Self { period, start, end }
    }

    /// Whether `timestamp` falls inside the window
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.start && timestamp < self.end
    }

    /// Records inside the window, in their original order
    #[must_use]
    pub fn filter<T: Timestamped + Clone>(&self, records: &[T]) -> Vec<T> {
        filter(records, self.start, self.end)
    }
}

/// Compute `(start, end)` for a period ending at `now`
#[must_use]
pub fn window(period: Period, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = match period {
        Period::Weekly => trailing_days(now, DAYS_PER_WEEK),
        Period::Monthly => now
            .checked_sub_months(Months::new(1))
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
    };
    (start, now)
}

/// `now` minus a whole number of days, saturating at the earliest representable instant
#[must_use]
pub fn trailing_days(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|offset| now.checked_sub_signed(offset))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Keep records with `start <= date < end`, preserving input order
#[must_use]
pub fn filter<T: Timestamped + Clone>(
    records: &[T],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| {
            let timestamp = record.timestamp();
            timestamp >= start && timestamp < end
        })
        .cloned()
        .collect()
}

/// Copy of `records` in ascending date order; equal dates keep their input order
#[must_use]
pub fn sorted_by_date<T: Timestamped + Clone>(records: &[T]) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(Timestamped::timestamp);
    sorted
}
