// ABOUTME: Dashboard aggregator assembling the always-visible season snapshot
// ABOUTME: Season averages, personal best, weekly activity, and readiness over all records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard snapshot
//!
//! Computed over the full, unwindowed history on every read. No trend
//! comparison happens here and nothing is cached.

use crate::aggregates::{activity_score, argmax, mean, readiness_score, recent_activity_count};
use crate::config::IntelligenceConfig;
use chrono::{DateTime, Utc};
use courtside_core::models::{GameMetric, GameRecord, TrainingRecord};
use serde::{Deserialize, Serialize};

/// Season-to-date per-game means
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonAverages {
    /// Points per game
    pub points: f64,
    /// Assists per game
    pub assists: f64,
    /// Rebounds per game
    pub rebounds: f64,
}

/// Best single game for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalBest {
    /// Metric the game was best at
    pub metric: GameMetric,
    /// Value achieved
    pub value: f64,
    /// The game itself
    pub game: GameRecord,
}

/// Always-on dashboard view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Games logged overall
    pub games_played: usize,
    /// Training sessions logged overall
    pub training_sessions: usize,
    /// Season-to-date averages
    pub season_averages: SeasonAverages,
    /// Best game for the configured metric
    pub personal_best: Option<PersonalBest>,
    /// Games plus sessions in the trailing activity window
    pub weekly_activity_count: usize,
    /// Engagement proxy (0-100)
    pub activity_score: u32,
    /// Performance proxy (0-100)
    pub readiness_score: u32,
}

/// Dashboard aggregator
#[derive(Debug, Clone, Default)]
pub struct DashboardAggregator {
    config: IntelligenceConfig,
}

impl DashboardAggregator {
    /// Create a dashboard aggregator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dashboard aggregator with custom configuration
    #[must_use]
    pub const fn with_config(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Snapshot as of now
    #[must_use]
    pub fn snapshot(&self, games: &[GameRecord], sessions: &[TrainingRecord]) -> DashboardSnapshot {
        self.snapshot_at(games, sessions, Utc::now())
    }

    /// Snapshot as of `now`
    #[must_use]
    pub fn snapshot_at(
        &self,
        games: &[GameRecord],
        sessions: &[TrainingRecord],
        now: DateTime<Utc>,
    ) -> DashboardSnapshot {
        let best_metric = self.config.personal_best_metric;
        let personal_best = argmax(games, |game| best_metric.value_of(game)).and_then(|game| {
            best_metric.value_of(game).map(|value| PersonalBest {
                metric: best_metric,
                value,
                game: game.clone(),
            })
        });

        let weekly_activity_count =
            recent_activity_count(games, sessions, &self.config.scoring, now);

        DashboardSnapshot {
            games_played: games.len(),
            training_sessions: sessions.len(),
            season_averages: SeasonAverages {
                points: mean(games, |game| GameMetric::Points.value_of(game)),
                assists: mean(games, |game| GameMetric::Assists.value_of(game)),
                rebounds: mean(games, |game| GameMetric::Rebounds.value_of(game)),
            },
            personal_best,
            weekly_activity_count,
            activity_score: activity_score(weekly_activity_count, &self.config.scoring),
            readiness_score: readiness_score(
                games,
                &self.config.readiness,
                self.config.scoring.max_score,
            ),
        }
    }
}
