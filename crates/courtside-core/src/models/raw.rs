// ABOUTME: Upstream record shapes as delivered by the record store before validation
// ABOUTME: Timestamps are unparsed strings; ingestion turns them into validated records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Game statistics as stored upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawGameRecord {
    /// Upstream identifier
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Game date (RFC 3339, naive date-time, or plain date)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date: Option<String>,
    /// Opponent team name
    #[serde(default)]
    pub opponent: Option<String>,
    /// Points scored
    #[serde(default)]
    pub points: Option<i64>,
    /// Assists made
    #[serde(default)]
    pub assists: Option<i64>,
    /// Rebounds collected
    #[serde(default)]
    pub rebounds: Option<i64>,
    /// Steals made
    #[serde(default)]
    pub steals: Option<i64>,
    /// Blocks made
    #[serde(default)]
    pub blocks: Option<i64>,
    /// Turnovers committed
    #[serde(default)]
    pub turnovers: Option<i64>,
    /// Minutes played
    #[serde(default)]
    pub minutes: Option<f64>,
}

/// Training session as stored upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTrainingRecord {
    /// Upstream identifier
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Session date
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date: Option<String>,
    /// Drill performed
    #[serde(default, alias = "drillType")]
    pub drill_type: Option<String>,
    /// Named measurements; non-numeric values are dropped
    #[serde(default, deserialize_with = "numeric_metrics")]
    pub metrics: BTreeMap<String, f64>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Goal as stored upstream
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawGoalRecord {
    /// Upstream identifier
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// "weekly", "monthly" or "seasonal"
    #[serde(default, rename = "type")]
    pub goal_type: Option<String>,
    /// Category (e.g. "Scoring")
    #[serde(default)]
    pub category: Option<String>,
    /// Short title
    #[serde(default)]
    pub title: Option<String>,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Value to reach
    #[serde(default, alias = "targetValue")]
    pub target_value: Option<f64>,
    /// Progress so far
    #[serde(default, alias = "currentValue")]
    pub current_value: Option<f64>,
    /// Unit of measurement
    #[serde(default)]
    pub metric: Option<String>,
    /// Start date
    #[serde(default, alias = "startDate", deserialize_with = "lenient_timestamp")]
    pub start_date: Option<String>,
    /// End date
    #[serde(default, alias = "endDate", deserialize_with = "lenient_timestamp")]
    pub end_date: Option<String>,
    /// "active", "completed" or "missed"
    #[serde(default)]
    pub status: Option<String>,
}

/// Keep any timestamp value as text so a wrongly typed date is rejected per record
/// at ingestion instead of failing the whole batch
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

/// Metrics map with non-numeric entries (null, strings, nested values) treated as absent
fn numeric_metrics<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|number| (key, number)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_date_kept_as_text() {
        let game: RawGameRecord =
            serde_json::from_str(r#"{"date": 20250313, "points": 12}"#).unwrap();
        assert_eq!(game.date.as_deref(), Some("20250313"));
        assert_eq!(game.points, Some(12));

        let undated: RawGameRecord = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert_eq!(undated.date, None);
    }

    #[test]
    fn test_non_numeric_metrics_are_absent() {
        let session: RawTrainingRecord = serde_json::from_str(
            r#"{"date": "2025-03-14", "metrics": {"speed": null, "agility": "fast", "vertical": 24}}"#,
        )
        .unwrap();
        assert_eq!(session.metrics.len(), 1);
        assert_eq!(session.metrics.get("vertical"), Some(&24.0));

        let odd: RawTrainingRecord =
            serde_json::from_str(r#"{"date": "2025-03-14", "metrics": [1, 2]}"#).unwrap();
        assert!(odd.metrics.is_empty());
    }

    #[test]
    fn test_goal_dates_accept_any_json_value() {
        let goal: RawGoalRecord =
            serde_json::from_str(r#"{"startDate": "2025-03-01", "endDate": false}"#).unwrap();
        assert_eq!(goal.start_date.as_deref(), Some("2025-03-01"));
        assert_eq!(goal.end_date.as_deref(), Some("false"));
    }
}
