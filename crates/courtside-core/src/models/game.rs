// ABOUTME: Game statistics record and the selectors used to read its numeric fields
// ABOUTME: Absent stats are None so analytics can tell "no data" apart from zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Timestamped;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statistics from one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameRecord {
    /// Upstream identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// When the game was played
    pub date: DateTime<Utc>,
    /// Opponent team name
    pub opponent: String,
    /// Points scored
    pub points: Option<u32>,
    /// Assists made
    pub assists: Option<u32>,
    /// Rebounds collected
    pub rebounds: Option<u32>,
    /// Steals made
    pub steals: Option<u32>,
    /// Blocks made
    pub blocks: Option<u32>,
    /// Turnovers committed
    pub turnovers: Option<u32>,
    /// Minutes played
    pub minutes: Option<f64>,
}

impl Timestamped for GameRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Numeric field of a game record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMetric {
    /// Points scored
    Points,
    /// Assists made
    Assists,
    /// Rebounds collected
    Rebounds,
    /// Steals made
    Steals,
    /// Blocks made
    Blocks,
    /// Turnovers committed
    Turnovers,
    /// Minutes played
    Minutes,
}

impl GameMetric {
    /// Read this metric from a game, `None` when the game did not report it
    #[must_use]
    pub fn value_of(self, game: &GameRecord) -> Option<f64> {
        match self {
            Self::Points => game.points.map(f64::from),
            Self::Assists => game.assists.map(f64::from),
            Self::Rebounds => game.rebounds.map(f64::from),
            Self::Steals => game.steals.map(f64::from),
            Self::Blocks => game.blocks.map(f64::from),
            Self::Turnovers => game.turnovers.map(f64::from),
            Self::Minutes => game.minutes,
        }
    }

    /// Snake case key used in configuration and serialized output
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Assists => "assists",
            Self::Rebounds => "rebounds",
            Self::Steals => "steals",
            Self::Blocks => "blocks",
            Self::Turnovers => "turnovers",
            Self::Minutes => "minutes",
        }
    }
}

impl fmt::Display for GameMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GameMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "assists" => Ok(Self::Assists),
            "rebounds" => Ok(Self::Rebounds),
            "steals" => Ok(Self::Steals),
            "blocks" => Ok(Self::Blocks),
            "turnovers" => Ok(Self::Turnovers),
            "minutes" => Ok(Self::Minutes),
            other => Err(format!("unknown game metric '{other}'")),
        }
    }
}
