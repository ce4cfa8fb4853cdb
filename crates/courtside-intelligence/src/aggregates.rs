// ABOUTME: Aggregate calculator for means, personal bests, activity and readiness scores
// ABOUTME: All functions are total: empty input yields 0 or None rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Aggregate calculator
//!
//! Field selectors return `Option<f64>`; records that do not carry the field
//! are skipped entirely, so a missing stat never drags a mean towards zero.

use crate::config::{ScoringConfig, SportProfile};
use crate::period::trailing_days;
use chrono::{DateTime, Utc};
use courtside_core::models::{GameRecord, Timestamped, TrainingRecord};

/// Arithmetic mean of the selected field over records that carry it.
///
/// Returns `0.0` when no record carries the field. Callers that turn the mean
/// into text must check [`sample_count`] first.
#[must_use]
pub fn mean<T, F>(records: &[T], field: F) -> f64
where
    F: Fn(&T) -> Option<f64>,
{
    let (sum, count) = records
        .iter()
        .filter_map(&field)
        .fold((0.0_f64, 0_usize), |(sum, count), value| {
            (sum + value, count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Number of records that carry the selected field
#[must_use]
pub fn sample_count<T, F>(records: &[T], field: F) -> usize
where
    F: Fn(&T) -> Option<f64>,
{
    records.iter().filter_map(field).count()
}

/// Record with the largest value of the selected field.
///
/// Ties resolve to the first occurrence. Records without the field (or with
/// a NaN value) never win.
#[must_use]
pub fn argmax<T, F>(records: &[T], field: F) -> Option<&T>
where
    F: Fn(&T) -> Option<f64>,
{
    let mut best: Option<(&T, f64)> = None;
    for record in records {
        let Some(value) = field(record).filter(|v| !v.is_nan()) else {
            continue;
        };
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((record, value)),
        }
    }
    best.map(|(record, _)| record)
}

/// Records with `start <= date < end`
#[must_use]
pub fn count_within<T: Timestamped>(
    records: &[T],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> usize {
    records
        .iter()
        .filter(|record| {
            let timestamp = record.timestamp();
            timestamp >= start && timestamp < end
        })
        .count()
}

/// Games plus training sessions logged in the trailing activity window
#[must_use]
pub fn recent_activity_count(
    games: &[GameRecord],
    sessions: &[TrainingRecord],
    scoring: &ScoringConfig,
    now: DateTime<Utc>,
) -> usize {
    let start = trailing_days(now, scoring.activity_window_days);
    count_within(games, start, now) + count_within(sessions, start, now)
}

/// Engagement proxy: `min(recent_count * points_per_activity, max_score)`.
///
/// Monotonically non-decreasing in `recent_count`. This measures how often the
/// athlete logs, not how well they play.
#[must_use]
pub fn activity_score(recent_count: usize, scoring: &ScoringConfig) -> u32 {
    let count = u32::try_from(recent_count).unwrap_or(u32::MAX);
    count
        .saturating_mul(scoring.points_per_activity)
        .min(scoring.max_score)
}

/// Performance proxy: `min(round(mean / ideal * 100), max_score)` over the whole season.
///
/// The sport profile decides which game metric is read and which mean counts as full readiness.
#[must_use]
pub fn readiness_score(games: &[GameRecord], profile: &SportProfile, max_score: u32) -> u32 {
    if !(profile.ideal_value.is_finite() && profile.ideal_value > 0.0) {
        return 0;
    }
    let season_mean = mean(games, |game| profile.metric.value_of(game));
    let percent = (season_mean / profile.ideal_value * 100.0).round();
    percent.clamp(0.0, f64::from(max_score)) as u32
}
