// ABOUTME: Record validation error raised when a logged record cannot be ingested
// ABOUTME: Identifies the offending record so the caller can surface it to the athlete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of record that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Game statistics record
    Game,
    /// Training session record
    TrainingSession,
    /// Goal record
    Goal,
}

impl RecordKind {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::TrainingSession => "training session",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single record was rejected at the ingestion boundary.
///
/// The record is excluded from analysis; the rest of the batch is still used.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Invalid {kind} #{index}{}: {reason}", id_suffix(.record_id.as_deref()))]
pub struct InvalidRecordError {
    /// Which collection the record came from
    pub kind: RecordKind,
    /// Position of the record in the collection handed to ingestion
    pub index: usize,
    /// Upstream identifier, when the record carried one
    pub record_id: Option<String>,
    /// Why the record was rejected
    pub reason: String,
}

fn id_suffix(record_id: Option<&str>) -> String {
    record_id.map_or_else(String::new, |id| format!(" (id {id})"))
}

impl InvalidRecordError {
    /// Create a new invalid record error
    #[must_use]
    pub fn new(
        kind: RecordKind,
        index: usize,
        record_id: Option<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            index,
            record_id,
            reason: reason.into(),
        }
    }

    /// A required field is absent or blank
    #[must_use]
    pub fn missing_field(
        kind: RecordKind,
        index: usize,
        record_id: Option<String>,
        field: &str,
    ) -> Self {
        Self::new(kind, index, record_id, format!("missing required {field}"))
    }

    /// Timestamp could not be parsed
    #[must_use]
    pub fn unparsable_date(
        kind: RecordKind,
        index: usize,
        record_id: Option<String>,
        field: &str,
        value: &str,
    ) -> Self {
        Self::new(
            kind,
            index,
            record_id,
            format!("unparsable {field} '{value}'"),
        )
    }
}
