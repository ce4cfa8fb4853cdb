// ABOUTME: Insight service that runs analytics over records held in a record store
// ABOUTME: Surfaces rejected records next to results and appends summaries to the summary log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::store::{RecordStore, StoredSummary, SummaryLog};
use chrono::{DateTime, Utc};
use courtside_core::errors::{AppResult, InvalidRecordError};
use courtside_core::models::{GameRecord, GoalRecord, Period, TrainingRecord};
use courtside_intelligence::{
    ingest_games, ingest_goals, ingest_training_sessions, recent_form_report, DashboardAggregator,
    DashboardSnapshot, InsightGenerator, IntelligenceConfig, RecentFormReport,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Validated records for one owner plus everything that was excluded
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    /// Valid games
    pub games: Vec<GameRecord>,
    /// Valid training sessions
    pub training_sessions: Vec<TrainingRecord>,
    /// Valid goals
    pub goals: Vec<GoalRecord>,
    /// Records excluded at ingestion
    pub rejected: Vec<InvalidRecordError>,
}

/// Result of a `generate_insights` call
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedInsights {
    /// Summary as appended to the log
    pub stored: StoredSummary,
    /// Records excluded from the analysis
    pub rejected: Vec<InvalidRecordError>,
}

/// Dashboard snapshot plus excluded records
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// The snapshot
    pub snapshot: DashboardSnapshot,
    /// Records excluded from the snapshot
    pub rejected: Vec<InvalidRecordError>,
}

/// Recent form report plus excluded records
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    /// The report
    pub report: RecentFormReport,
    /// Records excluded from the report
    pub rejected: Vec<InvalidRecordError>,
}

/// Runs analytics for an owner against a store
pub struct InsightService<S> {
    store: Arc<S>,
    generator: InsightGenerator,
    dashboard: DashboardAggregator,
    config: IntelligenceConfig,
}

impl<S> InsightService<S>
where
    S: RecordStore + SummaryLog,
{
    /// Create a service with the given store and thresholds
    #[must_use]
    pub fn new(store: Arc<S>, config: IntelligenceConfig) -> Self {
        Self {
            store,
            generator: InsightGenerator::with_config(config.clone()),
            dashboard: DashboardAggregator::with_config(config.clone()),
            config,
        }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Load and validate every record the owner has logged
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn load_records(&self, owner_id: &str) -> AppResult<LoadedRecords> {
        let games = ingest_games(&self.store.list_games(owner_id).await?);
        let sessions = ingest_training_sessions(&self.store.list_training_sessions(owner_id).await?);
        let goals = ingest_goals(&self.store.list_goals(owner_id).await?);

        let mut rejected = games.rejected;
        rejected.extend(sessions.rejected);
        rejected.extend(goals.rejected);
        for error in &rejected {
            warn!(owner_id, kind = %error.kind, index = error.index, "excluded record: {}", error.reason);
        }

        Ok(LoadedRecords {
            games: games.records,
            training_sessions: sessions.records,
            goals: goals.records,
            rejected,
        })
    }

    /// Generate a summary for the period ending now and append it to the log
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub async fn generate_insights(
        &self,
        owner_id: &str,
        period: Period,
    ) -> AppResult<GeneratedInsights> {
        self.generate_insights_at(owner_id, period, Utc::now()).await
    }

    /// Generate a summary for the period ending at `now` and append it to the log
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub async fn generate_insights_at(
        &self,
        owner_id: &str,
        period: Period,
        now: DateTime<Utc>,
    ) -> AppResult<GeneratedInsights> {
        let loaded = self.load_records(owner_id).await?;
        let summary = self.generator.generate_at(
            &loaded.games,
            &loaded.training_sessions,
            &loaded.goals,
            period,
            now,
        );
        let stored = self.store.append_summary(owner_id, summary).await?;
        info!(
            owner_id,
            period = %period,
            improvements = stored.summary.improvements.len(),
            focus_areas = stored.summary.focus_areas.len(),
            "generated insight summary"
        );
        Ok(GeneratedInsights {
            stored,
            rejected: loaded.rejected,
        })
    }

    /// Dashboard snapshot as of now
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn dashboard(&self, owner_id: &str) -> AppResult<DashboardView> {
        self.dashboard_at(owner_id, Utc::now()).await
    }

    /// Dashboard snapshot as of `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn dashboard_at(&self, owner_id: &str, now: DateTime<Utc>) -> AppResult<DashboardView> {
        let loaded = self.load_records(owner_id).await?;
        let snapshot = self
            .dashboard
            .snapshot_at(&loaded.games, &loaded.training_sessions, now);
        Ok(DashboardView {
            snapshot,
            rejected: loaded.rejected,
        })
    }

    /// Recent form report over the owner's latest games
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn recent_form(&self, owner_id: &str) -> AppResult<FormView> {
        let loaded = self.load_records(owner_id).await?;
        let report = recent_form_report(&loaded.games, &self.config);
        Ok(FormView {
            report,
            rejected: loaded.rejected,
        })
    }
}
