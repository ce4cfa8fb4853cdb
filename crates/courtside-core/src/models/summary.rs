// ABOUTME: Insight summary produced by the analytics engine for one reporting period
// ABOUTME: Immutable snapshot with narrative insights, improvements, focus areas, and a message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Period;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a metric moved the right way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Metric moved in its "better" direction
    Improved,
    /// Metric moved in its "worse" direction
    Declined,
}

/// How a change was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Percentage change relative to the older half's mean
    Relative,
    /// Point difference between the two halves' means
    Absolute,
}

/// A significant change detected within the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// Display name of the metric ("Points Per Game")
    pub metric: String,
    /// Signed change, rounded to a whole number
    pub change: i64,
    /// Whether `change` is a percentage or a point difference
    pub change_kind: ChangeKind,
    /// Improved or declined
    pub direction: TrendDirection,
    /// Human-readable description
    pub description: String,
}

/// Structured insight summary for one owner and period.
///
/// Built fresh on every generation call. Summaries are never merged or
/// deduplicated; keeping a history is the persistence layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Requested period
    pub period: Period,
    /// Inclusive window start
    pub window_start: DateTime<Utc>,
    /// Exclusive window end (evaluation time)
    pub window_end: DateTime<Utc>,
    /// When the summary was generated
    pub generated_at: DateTime<Utc>,
    /// Narrative activity facts
    pub insights: Vec<String>,
    /// Significant trend changes
    pub improvements: Vec<Improvement>,
    /// Threshold-triggered recommendations
    pub focus_areas: Vec<String>,
    /// Exactly one motivational message
    pub motivational_message: String,
}

impl InsightSummary {
    /// Whether any improvement moved in the right direction
    #[must_use]
    pub fn has_positive_improvement(&self) -> bool {
        self.improvements
            .iter()
            .any(|improvement| improvement.direction == TrendDirection::Improved)
    }
}
