// ABOUTME: Training session record with a free-form metrics map
// ABOUTME: Unknown metric keys are preserved but ignored by trend logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Timestamped;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    /// Upstream identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Drill performed (e.g. "Shooting Practice")
    pub drill_type: String,
    /// Named measurements, e.g. `freeThrowPercentage`
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TrainingRecord {
    /// Value of a named metric, `None` when the session did not report it
    #[must_use]
    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }
}

impl Timestamped for TrainingRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}
