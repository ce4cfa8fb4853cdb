// ABOUTME: Intelligence configuration replacing magic numbers in the insight engine
// ABOUTME: Provides defaults, validation, and environment-variable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Configuration
//!
//! A single named structure holding every threshold the engine uses, passed
//! into the generators so tests can probe threshold boundaries without
//! touching internals. Defaults reproduce the basketball rules the product
//! shipped with.

mod error;
mod thresholds;

pub use error::ConfigError;
pub use thresholds::{FocusThresholds, ScoringConfig, SportProfile, TrendThresholds};

use crate::trend::TrendMetric;
use courtside_core::models::GameMetric;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main intelligence configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Trend significance rules
    pub trend: TrendThresholds,
    /// Focus-area triggers
    pub focus: FocusThresholds,
    /// Activity score parameters
    pub scoring: ScoringConfig,
    /// Readiness reference for the athlete's sport
    pub readiness: SportProfile,
    /// Metrics compared by the trend comparator, in output order
    pub tracked_metrics: Vec<TrendMetric>,
    /// Number of most recent games covered by the recent form report
    pub recent_form_games: usize,
    /// Game metric used for the dashboard personal best
    pub personal_best_metric: GameMetric,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            trend: TrendThresholds::default(),
            focus: FocusThresholds::default(),
            scoring: ScoringConfig::default(),
            readiness: SportProfile::default(),
            tracked_metrics: vec![TrendMetric::PointsPerGame, TrendMetric::FreeThrowPercentage],
            recent_form_games: 10,
            personal_best_metric: GameMetric::Points,
        }
    }
}

impl IntelligenceConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable or invalid value
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        override_from_env("COURTSIDE_TREND_MIN_SAMPLES", &mut config.trend.min_samples)?;
        override_from_env(
            "COURTSIDE_RELATIVE_CHANGE_THRESHOLD",
            &mut config.trend.relative_min_change_percent,
        )?;
        override_from_env(
            "COURTSIDE_ABSOLUTE_CHANGE_THRESHOLD",
            &mut config.trend.absolute_min_change_points,
        )?;
        override_from_env("COURTSIDE_MAX_TURNOVERS", &mut config.focus.max_turnovers)?;
        override_from_env("COURTSIDE_MIN_ASSISTS", &mut config.focus.min_assists)?;
        override_from_env(
            "COURTSIDE_MIN_THREE_POINT_PCT",
            &mut config.focus.min_three_point_percentage,
        )?;
        override_from_env(
            "COURTSIDE_GOAL_FOCUS_ENABLED",
            &mut config.focus.goal_focus_enabled,
        )?;
        override_from_env(
            "COURTSIDE_POINTS_PER_ACTIVITY",
            &mut config.scoring.points_per_activity,
        )?;
        override_from_env(
            "COURTSIDE_READINESS_IDEAL",
            &mut config.readiness.ideal_value,
        )?;
        override_from_env("COURTSIDE_READINESS_METRIC", &mut config.readiness.metric)?;
        override_from_env(
            "COURTSIDE_RECENT_FORM_GAMES",
            &mut config.recent_form_games,
        )?;

        if let Some(val) = read_env("COURTSIDE_TRACKED_METRICS")? {
            config.tracked_metrics = val
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(TrendMetric::from_str)
                .collect::<Result<Vec<_>, _>>()
                .map_err(ConfigError::Parse)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is outside its acceptable range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend.min_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend.min_samples must be at least 1",
            ));
        }
        if !is_non_negative(self.trend.relative_min_change_percent) {
            return Err(ConfigError::InvalidRange(
                "trend.relative_min_change_percent must be >= 0",
            ));
        }
        if !is_non_negative(self.trend.absolute_min_change_points) {
            return Err(ConfigError::InvalidRange(
                "trend.absolute_min_change_points must be >= 0",
            ));
        }
        if !is_non_negative(self.focus.max_turnovers)
            || !is_non_negative(self.focus.min_assists)
            || !is_non_negative(self.focus.min_three_point_percentage)
        {
            return Err(ConfigError::InvalidRange("focus thresholds must be >= 0"));
        }
        if self.scoring.activity_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "scoring.activity_window_days must be positive",
            ));
        }
        if self.scoring.points_per_activity == 0 || self.scoring.max_score == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "scoring.points_per_activity and scoring.max_score must be positive",
            ));
        }
        if !(self.readiness.ideal_value.is_finite() && self.readiness.ideal_value > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "readiness.ideal_value must be positive",
            ));
        }
        if self.recent_form_games == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent_form_games must be at least 1",
            ));
        }
        Ok(())
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Value of `name`, `None` when unset; non-UTF-8 content is an error
fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(ConfigError::EnvVar(err)),
    }
}

/// Replace `target` with the parsed value of `name` when the variable is set
fn override_from_env<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Some(val) = read_env(name)? {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{name}='{val}'")))?;
    }
    Ok(())
}
