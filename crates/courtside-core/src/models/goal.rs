// ABOUTME: Goal record read by the insight engine for goal-adjacent focus areas
// ABOUTME: The engine never mutates goal state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Horizon a goal is set over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPeriod {
    /// One-week goal
    Weekly,
    /// One-month goal
    Monthly,
    /// Whole-season goal
    Seasonal,
}

/// Lifecycle state of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Still being worked on
    Active,
    /// Target reached
    Completed,
    /// End date passed without reaching the target
    Missed,
}

/// A goal the athlete has set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    /// Upstream identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Goal horizon
    #[serde(rename = "type")]
    pub goal_type: GoalPeriod,
    /// Category (e.g. "Scoring")
    pub category: String,
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Value to reach
    pub target_value: Option<f64>,
    /// Progress so far
    pub current_value: Option<f64>,
    /// Unit of measurement (e.g. "points")
    pub metric: Option<String>,
    /// When the goal starts
    pub start_date: DateTime<Utc>,
    /// When the goal ends
    pub end_date: DateTime<Utc>,
    /// Lifecycle state
    pub status: GoalStatus,
}
