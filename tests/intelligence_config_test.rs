// ABOUTME: Tests for intelligence configuration defaults, validation, and environment overrides
// ABOUTME: Environment tests run serially since they mutate process-wide variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use courtside::config::AppConfig;
use courtside::errors::{ConfigError, ErrorCode};
use courtside::intelligence::{IntelligenceConfig, TrendMetric};
use courtside::models::GameMetric;
use serial_test::serial;
use std::env;

const VARS: [&str; 6] = [
    "COURTSIDE_RELATIVE_CHANGE_THRESHOLD",
    "COURTSIDE_MAX_TURNOVERS",
    "COURTSIDE_TRACKED_METRICS",
    "COURTSIDE_READINESS_METRIC",
    "COURTSIDE_READINESS_IDEAL",
    "COURTSIDE_GOAL_FOCUS_ENABLED",
];

fn clear_env() {
    for name in VARS {
        env::remove_var(name);
    }
}

#[test]
fn test_default_config_validation() {
    let config = IntelligenceConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trend.min_samples, 2);
    assert!((config.trend.relative_min_change_percent - 5.0).abs() < f64::EPSILON);
    assert!((config.trend.absolute_min_change_points - 3.0).abs() < f64::EPSILON);
    assert_eq!(
        config.tracked_metrics,
        vec![TrendMetric::PointsPerGame, TrendMetric::FreeThrowPercentage]
    );
}

#[test]
fn test_invalid_values_rejected() {
    let mut config = IntelligenceConfig::default();
    config.trend.min_samples = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = IntelligenceConfig::default();
    config.focus.min_assists = -1.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = IntelligenceConfig::default();
    config.scoring.max_score = 0;
    assert!(config.validate().is_err());

    let mut config = IntelligenceConfig::default();
    config.recent_form_games = 0;
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("COURTSIDE_RELATIVE_CHANGE_THRESHOLD", "10");
    env::set_var("COURTSIDE_MAX_TURNOVERS", "2.5");
    env::set_var("COURTSIDE_TRACKED_METRICS", "points_per_game, turnovers_per_game");
    env::set_var("COURTSIDE_READINESS_METRIC", "rebounds");
    env::set_var("COURTSIDE_READINESS_IDEAL", "8");
    env::set_var("COURTSIDE_GOAL_FOCUS_ENABLED", "false");

    let config = IntelligenceConfig::from_environment().unwrap();
    clear_env();

    assert!((config.trend.relative_min_change_percent - 10.0).abs() < f64::EPSILON);
    assert!((config.focus.max_turnovers - 2.5).abs() < f64::EPSILON);
    assert_eq!(
        config.tracked_metrics,
        vec![TrendMetric::PointsPerGame, TrendMetric::TurnoversPerGame]
    );
    assert_eq!(config.readiness.metric, GameMetric::Rebounds);
    assert!((config.readiness.ideal_value - 8.0).abs() < f64::EPSILON);
    assert!(!config.focus.goal_focus_enabled);
}

#[test]
#[serial]
fn test_unparsable_override_is_an_error() {
    clear_env();
    env::set_var("COURTSIDE_MAX_TURNOVERS", "lots");
    let result = IntelligenceConfig::from_environment();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_env();
    env::set_var("COURTSIDE_READINESS_IDEAL", "0");
    let result = AppConfig::from_env();
    clear_env();

    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.http_status(), 400);
}

#[test]
#[serial]
fn test_unparsable_override_maps_to_config_invalid() {
    clear_env();
    env::set_var("COURTSIDE_MAX_TURNOVERS", "lots");
    let result = AppConfig::from_env();
    clear_env();

    assert_eq!(result.unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_utf8_override_is_an_env_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    env::set_var(
        "COURTSIDE_MAX_TURNOVERS",
        OsStr::from_bytes(&[0x66, 0x6f, 0x80]),
    );
    let result = IntelligenceConfig::from_environment();
    clear_env();

    assert!(matches!(
        result,
        Err(ConfigError::EnvVar(env::VarError::NotUnicode(_)))
    ));
}

#[test]
#[serial]
fn test_unknown_tracked_metric_rejected() {
    clear_env();
    env::set_var("COURTSIDE_TRACKED_METRICS", "points_per_game,dunks");
    let result = IntelligenceConfig::from_environment();
    clear_env();

    assert!(result.is_err());
}
