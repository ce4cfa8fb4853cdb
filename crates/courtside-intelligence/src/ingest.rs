// ABOUTME: Record ingestion boundary validating upstream records before analysis
// ABOUTME: Rejects records with missing or unparsable timestamps without failing the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record ingestion
//!
//! Upstream records arrive with timestamps as strings. Each one is parsed
//! explicitly here; a record whose required timestamp is missing or
//! unparsable is excluded and reported as an [`InvalidRecordError`], and the
//! remaining records are analysed as usual.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use courtside_core::constants::training_metrics;
use courtside_core::errors::{InvalidRecordError, RecordKind};
use courtside_core::models::{
    GameRecord, GoalPeriod, GoalRecord, GoalStatus, RawGameRecord, RawGoalRecord,
    RawTrainingRecord, TrainingRecord,
};
use tracing::{debug, trace};

/// Naive date-time layouts accepted in addition to RFC 3339
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Plain date layout (midnight UTC)
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated records plus one error per rejected record
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested<T> {
    /// Records that passed validation, in input order
    pub records: Vec<T>,
    /// Records that were excluded
    pub rejected: Vec<InvalidRecordError>,
}

impl<T> Default for Ingested<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Ingested<T> {
    /// Whether every record passed validation
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Parse an upstream timestamp.
///
/// Accepts RFC 3339, naive date-times (treated as UTC) and plain dates
/// (midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn required_timestamp(
    kind: RecordKind,
    index: usize,
    id: Option<&String>,
    field: &str,
    value: Option<&str>,
) -> Result<DateTime<Utc>, InvalidRecordError> {
    match value.map(str::trim) {
        None | Some("") => Err(InvalidRecordError::missing_field(
            kind,
            index,
            id.cloned(),
            field,
        )),
        Some(raw) => parse_timestamp(raw).ok_or_else(|| {
            InvalidRecordError::unparsable_date(kind, index, id.cloned(), field, raw)
        }),
    }
}

fn count_field(
    index: usize,
    id: Option<&String>,
    field: &str,
    value: Option<i64>,
) -> Result<Option<u32>, InvalidRecordError> {
    value
        .map(|raw| {
            u32::try_from(raw).map_err(|_| {
                InvalidRecordError::new(
                    RecordKind::Game,
                    index,
                    id.cloned(),
                    format!("{field} must be a non-negative count, got {raw}"),
                )
            })
        })
        .transpose()
}

fn validate_game(index: usize, raw: &RawGameRecord) -> Result<GameRecord, InvalidRecordError> {
    let id = raw.id.as_ref();
    let date = required_timestamp(RecordKind::Game, index, id, "date", raw.date.as_deref())?;
    if let Some(minutes) = raw.minutes.filter(|m| !(m.is_finite() && *m >= 0.0)) {
        return Err(InvalidRecordError::new(
            RecordKind::Game,
            index,
            id.cloned(),
            format!("minutes must be non-negative, got {minutes}"),
        ));
    }

    Ok(GameRecord {
        id: raw.id.clone(),
        date,
        opponent: raw.opponent.clone().unwrap_or_default(),
        points: count_field(index, id, "points", raw.points)?,
        assists: count_field(index, id, "assists", raw.assists)?,
        rebounds: count_field(index, id, "rebounds", raw.rebounds)?,
        steals: count_field(index, id, "steals", raw.steals)?,
        blocks: count_field(index, id, "blocks", raw.blocks)?,
        turnovers: count_field(index, id, "turnovers", raw.turnovers)?,
        minutes: raw.minutes,
    })
}

fn validate_session(
    index: usize,
    raw: &RawTrainingRecord,
) -> Result<TrainingRecord, InvalidRecordError> {
    let date = required_timestamp(
        RecordKind::TrainingSession,
        index,
        raw.id.as_ref(),
        "date",
        raw.date.as_deref(),
    )?;

    for key in raw.metrics.keys().filter(|key| !training_metrics::is_known(key)) {
        trace!(index, key = %key, "keeping unrecognised training metric");
    }

    Ok(TrainingRecord {
        id: raw.id.clone(),
        date,
        drill_type: raw.drill_type.clone().unwrap_or_default(),
        metrics: raw.metrics.clone(),
        notes: raw.notes.clone(),
    })
}

fn goal_period(raw: Option<&str>) -> GoalPeriod {
    match raw.map(str::to_lowercase).as_deref() {
        Some("weekly") => GoalPeriod::Weekly,
        Some("monthly") => GoalPeriod::Monthly,
        _ => GoalPeriod::Seasonal,
    }
}

fn goal_status(raw: Option<&str>) -> GoalStatus {
    match raw.map(str::to_lowercase).as_deref() {
        Some("completed") => GoalStatus::Completed,
        Some("missed" | "abandoned") => GoalStatus::Missed,
        _ => GoalStatus::Active,
    }
}

fn validate_goal(index: usize, raw: &RawGoalRecord) -> Result<GoalRecord, InvalidRecordError> {
    let id = raw.id.as_ref();
    let start_date = required_timestamp(
        RecordKind::Goal,
        index,
        id,
        "start_date",
        raw.start_date.as_deref(),
    )?;
    let end_date = required_timestamp(
        RecordKind::Goal,
        index,
        id,
        "end_date",
        raw.end_date.as_deref(),
    )?;

    Ok(GoalRecord {
        id: raw.id.clone(),
        goal_type: goal_period(raw.goal_type.as_deref()),
        category: raw.category.clone().unwrap_or_default(),
        title: raw.title.clone().unwrap_or_default(),
        description: raw.description.clone().unwrap_or_default(),
        target_value: raw.target_value,
        current_value: raw.current_value,
        metric: raw.metric.clone(),
        start_date,
        end_date,
        status: goal_status(raw.status.as_deref()),
    })
}

fn ingest<R, T>(
    raw: &[R],
    kind: RecordKind,
    validate: impl Fn(usize, &R) -> Result<T, InvalidRecordError>,
) -> Ingested<T> {
    let mut outcome = Ingested::default();
    for (index, record) in raw.iter().enumerate() {
        match validate(index, record) {
            Ok(valid) => outcome.records.push(valid),
            Err(error) => outcome.rejected.push(error),
        }
    }
    debug!(
        kind = %kind,
        accepted = outcome.records.len(),
        rejected = outcome.rejected.len(),
        "ingested records"
    );
    outcome
}

/// Validate upstream game records
#[must_use]
pub fn ingest_games(raw: &[RawGameRecord]) -> Ingested<GameRecord> {
    ingest(raw, RecordKind::Game, validate_game)
}

/// Validate upstream training sessions
#[must_use]
pub fn ingest_training_sessions(raw: &[RawTrainingRecord]) -> Ingested<TrainingRecord> {
    ingest(raw, RecordKind::TrainingSession, validate_session)
}

/// Validate upstream goals
#[must_use]
pub fn ingest_goals(raw: &[RawGoalRecord]) -> Ingested<GoalRecord> {
    ingest(raw, RecordKind::Goal, validate_goal)
}
