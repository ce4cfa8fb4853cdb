// ABOUTME: Half-split trend comparator detecting significant change within one window
// ABOUTME: Compares the older and more recent halves of a window against configurable thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend comparator
//!
//! Given records in ascending date order, the records that actually carry the
//! field are split into two contiguous halves: the first `floor(n/2)` form the
//! older half and the last `ceil(n/2)` the recent half. The comparison is
//! relative to the window itself, never to an earlier period.

use crate::aggregates::mean;
use crate::config::TrendThresholds;
use courtside_core::constants::training_metrics;
use courtside_core::models::{
    ChangeKind, GameMetric, GameRecord, Period, TrainingRecord, TrendDirection,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Which way is "better" for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Larger values are better (points, shooting percentages)
    HigherIsBetter,
    /// Smaller values are better (turnovers)
    LowerIsBetter,
}

impl Polarity {
    /// Direction implied by a signed delta
    #[must_use]
    pub fn direction_of(self, delta: f64) -> TrendDirection {
        match (self, delta > 0.0) {
            (Self::HigherIsBetter, true) | (Self::LowerIsBetter, false) => TrendDirection::Improved,
            _ => TrendDirection::Declined,
        }
    }
}

/// How a comparison should be made and when it counts as significant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRule {
    /// Relative percentage change or absolute point difference
    pub change_kind: ChangeKind,
    /// Which direction counts as an improvement
    pub polarity: Polarity,
    /// Minimum records carrying the field
    pub min_samples: usize,
    /// `abs(delta)` must be strictly greater than this
    pub min_magnitude: f64,
}

/// Outcome of a significant comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Mean of the older half
    pub older_mean: f64,
    /// Mean of the recent half
    pub recent_mean: f64,
    /// Records in the older half
    pub older_samples: usize,
    /// Records in the recent half
    pub recent_samples: usize,
    /// Signed delta (percent for relative, points for absolute)
    pub delta: f64,
    /// How `delta` was computed
    pub change_kind: ChangeKind,
    /// Improved or declined, after applying polarity
    pub direction: TrendDirection,
}

/// Compare the older and recent halves of `ordered` for one field.
///
/// Returns `None` when fewer than `min_samples` records carry the field,
/// when either half would be empty, when a relative comparison has an older
/// mean of zero, or when the change does not exceed `min_magnitude`.
#[must_use]
pub fn compare<T, F>(ordered: &[T], field: F, rule: &ComparisonRule) -> Option<ComparisonResult>
where
    F: Fn(&T) -> Option<f64>,
{
    let samples: Vec<f64> = ordered.iter().filter_map(field).collect();
    let n = samples.len();
    if n < rule.min_samples || n < 2 {
        trace!(samples = n, "trend comparison skipped: not enough samples");
        return None;
    }

    let (older, recent) = samples.split_at(n / 2);
    let older_mean = mean(older, |value| Some(*value));
    let recent_mean = mean(recent, |value| Some(*value));

    let delta = match rule.change_kind {
        ChangeKind::Absolute => recent_mean - older_mean,
        ChangeKind::Relative => {
            if older_mean == 0.0 {
                trace!("trend comparison skipped: older mean is zero");
                return None;
            }
            (recent_mean - older_mean) / older_mean * 100.0
        }
    };

    // NaN fails this comparison too
    if !(delta.abs() > rule.min_magnitude) {
        return None;
    }

    Some(ComparisonResult {
        older_mean,
        recent_mean,
        older_samples: older.len(),
        recent_samples: recent.len(),
        delta,
        change_kind: rule.change_kind,
        direction: rule.polarity.direction_of(delta),
    })
}

/// Where a tracked metric is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricSource {
    /// A numeric field of game records
    Game(GameMetric),
    /// A named metric of training sessions
    Training(&'static str),
}

/// Metrics the insight engine knows how to compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    /// Points per game (relative)
    PointsPerGame,
    /// Assists per game (relative)
    AssistsPerGame,
    /// Rebounds per game (relative)
    ReboundsPerGame,
    /// Turnovers per game (relative, lower is better)
    TurnoversPerGame,
    /// Free throw percentage from training (absolute)
    FreeThrowPercentage,
    /// Three-point percentage from training (absolute)
    ThreePointPercentage,
    /// Training session minutes (relative)
    TrainingMinutes,
}

impl TrendMetric {
    /// Every metric in the catalog
    pub const ALL: [Self; 7] = [
        Self::PointsPerGame,
        Self::AssistsPerGame,
        Self::ReboundsPerGame,
        Self::TurnoversPerGame,
        Self::FreeThrowPercentage,
        Self::ThreePointPercentage,
        Self::TrainingMinutes,
    ];

    /// Name shown in improvement entries
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PointsPerGame => "Points Per Game",
            Self::AssistsPerGame => "Assists Per Game",
            Self::ReboundsPerGame => "Rebounds Per Game",
            Self::TurnoversPerGame => "Turnovers Per Game",
            Self::FreeThrowPercentage => "Free Throw %",
            Self::ThreePointPercentage => "Three Point %",
            Self::TrainingMinutes => "Training Minutes",
        }
    }

    /// Configuration key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PointsPerGame => "points_per_game",
            Self::AssistsPerGame => "assists_per_game",
            Self::ReboundsPerGame => "rebounds_per_game",
            Self::TurnoversPerGame => "turnovers_per_game",
            Self::FreeThrowPercentage => "free_throw_percentage",
            Self::ThreePointPercentage => "three_point_percentage",
            Self::TrainingMinutes => "training_minutes",
        }
    }

    /// Where the values come from
    #[must_use]
    pub const fn source(self) -> MetricSource {
        match self {
            Self::PointsPerGame => MetricSource::Game(GameMetric::Points),
            Self::AssistsPerGame => MetricSource::Game(GameMetric::Assists),
            Self::ReboundsPerGame => MetricSource::Game(GameMetric::Rebounds),
            Self::TurnoversPerGame => MetricSource::Game(GameMetric::Turnovers),
            Self::FreeThrowPercentage => {
                MetricSource::Training(training_metrics::FREE_THROW_PERCENTAGE)
            }
            Self::ThreePointPercentage => {
                MetricSource::Training(training_metrics::THREE_POINT_PERCENTAGE)
            }
            Self::TrainingMinutes => MetricSource::Training(training_metrics::DURATION_MINUTES),
        }
    }

    /// Percentages compare by point difference, counts and volumes by relative change
    #[must_use]
    pub const fn change_kind(self) -> ChangeKind {
        match self {
            Self::FreeThrowPercentage | Self::ThreePointPercentage => ChangeKind::Absolute,
            _ => ChangeKind::Relative,
        }
    }

    /// Which direction is better
    #[must_use]
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::TurnoversPerGame => Polarity::LowerIsBetter,
            _ => Polarity::HigherIsBetter,
        }
    }

    /// Comparison rule for this metric under the given thresholds
    #[must_use]
    pub fn rule(self, thresholds: &TrendThresholds) -> ComparisonRule {
        let change_kind = self.change_kind();
        ComparisonRule {
            change_kind,
            polarity: self.polarity(),
            min_samples: thresholds.min_samples,
            min_magnitude: match change_kind {
                ChangeKind::Relative => thresholds.relative_min_change_percent,
                ChangeKind::Absolute => thresholds.absolute_min_change_points,
            },
        }
    }

    /// Run the comparator for this metric over date-ordered games and sessions
    #[must_use]
    pub fn compare(
        self,
        games: &[GameRecord],
        sessions: &[TrainingRecord],
        thresholds: &TrendThresholds,
    ) -> Option<ComparisonResult> {
        let rule = self.rule(thresholds);
        match self.source() {
            MetricSource::Game(metric) => compare(games, |game| metric.value_of(game), &rule),
            MetricSource::Training(key) => compare(sessions, |session| session.metric(key), &rule),
        }
    }

    /// Athlete-facing sentence for a rounded change
    #[must_use]
    pub fn describe(self, direction: TrendDirection, change: i64, period: Period) -> String {
        let amount = change.unsigned_abs();
        let noun = period.noun();
        match (self, direction) {
            (Self::PointsPerGame, TrendDirection::Improved) => {
                format!("Your scoring improved by {amount}% this {noun}!")
            }
            (Self::PointsPerGame, TrendDirection::Declined) => format!(
                "Your scoring decreased by {amount}% - let's work on getting back on track."
            ),
            (Self::AssistsPerGame, TrendDirection::Improved) => format!(
                "Your playmaking improved by {amount}% this {noun} - keep finding open teammates!"
            ),
            (Self::AssistsPerGame, TrendDirection::Declined) => {
                format!("Your assists decreased by {amount}% - look for the extra pass.")
            }
            (Self::ReboundsPerGame, TrendDirection::Improved) => {
                format!("Your rebounding improved by {amount}% this {noun}!")
            }
            (Self::ReboundsPerGame, TrendDirection::Declined) => format!(
                "Your rebounding decreased by {amount}% - box out and crash the glass."
            ),
            (Self::TurnoversPerGame, TrendDirection::Improved) => format!(
                "You cut your turnovers by {amount}% this {noun} - great ball security!"
            ),
            (Self::TurnoversPerGame, TrendDirection::Declined) => format!(
                "Your turnovers increased by {amount}% - protect the ball with control drills."
            ),
            (Self::FreeThrowPercentage, TrendDirection::Improved) => format!(
                "Your free throw shooting improved by {amount}% - great work at the line!"
            ),
            (Self::FreeThrowPercentage, TrendDirection::Declined) => format!(
                "Your free throw percentage dropped {amount}% - more practice needed."
            ),
            (Self::ThreePointPercentage, TrendDirection::Improved) => format!(
                "Your three-point shooting improved by {amount}% - your range is growing!"
            ),
            (Self::ThreePointPercentage, TrendDirection::Declined) => format!(
                "Your three-point percentage dropped {amount}% - get more reps from deep."
            ),
            (Self::TrainingMinutes, TrendDirection::Improved) => format!(
                "Your training volume grew by {amount}% this {noun} - excellent work ethic!"
            ),
            (Self::TrainingMinutes, TrendDirection::Declined) => format!(
                "Your training volume dropped {amount}% - try to keep your sessions consistent."
            ),
        }
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TrendMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|metric| metric.key() == wanted)
            .ok_or_else(|| format!("unknown trend metric '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_rule(min_magnitude: f64) -> ComparisonRule {
        ComparisonRule {
            change_kind: ChangeKind::Relative,
            polarity: Polarity::HigherIsBetter,
            min_samples: 2,
            min_magnitude,
        }
    }

    #[test]
    fn test_halves_split_older_front_recent_back() {
        let values = vec![Some(10.0), Some(12.0), Some(20.0), Some(22.0)];
        let result = compare(&values, |v| *v, &relative_rule(5.0)).unwrap();
        assert!((result.older_mean - 11.0).abs() < 1e-9);
        assert!((result.recent_mean - 21.0).abs() < 1e-9);
        assert!((result.delta - 90.909_090_909).abs() < 1e-6);
        assert_eq!(result.direction, TrendDirection::Improved);
    }

    #[test]
    fn test_odd_count_gives_recent_half_the_extra_record() {
        let values = vec![Some(10.0), Some(20.0), Some(30.0)];
        let result = compare(&values, |v| *v, &relative_rule(0.0)).unwrap();
        assert_eq!(result.older_samples, 1);
        assert_eq!(result.recent_samples, 2);
    }

    #[test]
    fn test_zero_older_mean_skips_relative_comparison() {
        let values = vec![Some(0.0), Some(0.0), Some(5.0), Some(7.0)];
        assert!(compare(&values, |v| *v, &relative_rule(5.0)).is_none());
    }

    #[test]
    fn test_lower_is_better_polarity() {
        assert_eq!(
            Polarity::LowerIsBetter.direction_of(-12.0),
            TrendDirection::Improved
        );
        assert_eq!(
            Polarity::LowerIsBetter.direction_of(12.0),
            TrendDirection::Declined
        );
    }

    #[test]
    fn test_metric_keys_round_trip() {
        for metric in TrendMetric::ALL {
            assert_eq!(metric.key().parse::<TrendMetric>(), Ok(metric));
        }
    }
}
