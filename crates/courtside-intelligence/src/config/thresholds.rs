// ABOUTME: Threshold groups for trend detection, focus areas, scoring, and readiness
// ABOUTME: Every tunable number used by the insight engine lives in one of these structs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use courtside_core::models::GameMetric;
use serde::{Deserialize, Serialize};

/// Significance rules for the half-split trend comparator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Minimum number of records carrying the field before comparing
    pub min_samples: usize,
    /// Relative change (percent) a count metric must exceed
    pub relative_min_change_percent: f64,
    /// Point difference a percentage metric must exceed
    pub absolute_min_change_points: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            min_samples: 2,
            relative_min_change_percent: 5.0,
            absolute_min_change_points: 3.0,
        }
    }
}

/// Bars that trigger focus-area advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusThresholds {
    /// Ball-handling advice when mean turnovers exceed this
    pub max_turnovers: f64,
    /// Playmaking advice when mean assists fall below this
    pub min_assists: f64,
    /// Shooting advice when mean three-point percentage falls below this
    pub min_three_point_percentage: f64,
    /// Mention active goals that are still short of target
    pub goal_focus_enabled: bool,
}

impl Default for FocusThresholds {
    fn default() -> Self {
        Self {
            max_turnovers: 3.0,
            min_assists: 2.0,
            min_three_point_percentage: 35.0,
            goal_focus_enabled: true,
        }
    }
}

/// Activity score parameters.
///
/// The activity score is an engagement proxy (how often the athlete logs),
/// not a measure of skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Trailing window, in days, counted as "recent"
    pub activity_window_days: i64,
    /// Score awarded per recent game or session
    pub points_per_activity: u32,
    /// Upper bound for activity and readiness scores
    pub max_score: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            activity_window_days: 7,
            points_per_activity: 15,
            max_score: 100,
        }
    }
}

/// Per-sport readiness reference: which game metric to read and what value counts as 100%
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportProfile {
    /// Game metric whose season mean drives readiness
    pub metric: GameMetric,
    /// Mean value that maps to a full readiness score
    pub ideal_value: f64,
}

impl Default for SportProfile {
    fn default() -> Self {
        Self {
            metric: GameMetric::Points,
            ideal_value: 20.0,
        }
    }
}
