// ABOUTME: Performance analytics and insights engine for Courtside
// ABOUTME: Period windowing, aggregates, trend comparison, insight synthesis, and dashboards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Courtside Intelligence
//!
//! Deterministic, rule-based analytics over an athlete's logged games and
//! training sessions. Nothing here performs I/O or holds shared state: every
//! entry point is a function of its arguments (plus the evaluation time),
//! so it is safe to call concurrently for different owners.
//!
//! - [`period`]: half-open weekly/monthly windows
//! - [`aggregates`]: means, personal bests, activity and readiness scores
//! - [`trend`]: half-split comparator with configurable significance thresholds
//! - [`insights`]: period summary synthesis
//! - [`dashboard`]: season snapshot
//! - [`form_report`]: recent form across five skill areas
//! - [`ingest`]: validation of upstream records

/// Intelligence thresholds and environment overrides
pub mod config;

/// Period windowing
pub mod period;

/// Aggregate calculator
pub mod aggregates;

/// Trend comparator and tracked metric catalog
pub mod trend;

/// Insight synthesizer
pub mod insights;

/// Dashboard aggregator
pub mod dashboard;

/// Recent form report
pub mod form_report;

/// Upstream record validation
pub mod ingest;

pub use config::{ConfigError, IntelligenceConfig};
pub use dashboard::{DashboardAggregator, DashboardSnapshot, PersonalBest, SeasonAverages};
pub use form_report::{recent_form_report, AreaProgress, FormAverages, RecentFormReport};
pub use ingest::{ingest_games, ingest_goals, ingest_training_sessions, Ingested};
pub use insights::InsightGenerator;
pub use period::PeriodWindow;
pub use trend::{compare, ComparisonResult, ComparisonRule, Polarity, TrendMetric};
