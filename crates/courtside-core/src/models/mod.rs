// ABOUTME: Core data models for Courtside records and derived summaries
// ABOUTME: Re-exports game, training, goal, period, raw upstream, and summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records are owned and persisted by the record store; the analytics engine
//! only reads them. Validated records (`GameRecord`, `TrainingRecord`,
//! `GoalRecord`) always carry a real timestamp. Their `Raw*` counterparts
//! mirror what arrives from upstream before validation.

mod game;
mod goal;
mod period;
mod raw;
mod summary;
mod training;

pub use game::{GameMetric, GameRecord};
pub use goal::{GoalPeriod, GoalRecord, GoalStatus};
pub use period::Period;
pub use raw::{RawGameRecord, RawGoalRecord, RawTrainingRecord};
pub use summary::{ChangeKind, Improvement, InsightSummary, TrendDirection};
pub use training::TrainingRecord;

use chrono::{DateTime, Utc};

/// Anything logged at a point in time
pub trait Timestamped {
    /// When the record happened
    fn timestamp(&self) -> DateTime<Utc>;
}
