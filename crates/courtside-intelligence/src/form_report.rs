// ABOUTME: Recent form report summarizing the athlete's last games across five areas
// ABOUTME: Deterministic per-area averages, takeaway, and next steps without any model inference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recent form report
//!
//! Looks at the most recent games (ten by default) and reports per-area
//! averages for scoring, playmaking, defense, ball control and rebounding.

use crate::aggregates::mean;
use crate::config::IntelligenceConfig;
use crate::period::sorted_by_date;
use courtside_core::models::{GameMetric, GameRecord};
use serde::{Deserialize, Serialize};

/// Per-game means over the analysed games
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormAverages {
    /// Points per game
    pub points: f64,
    /// Assists per game
    pub assists: f64,
    /// Rebounds per game
    pub rebounds: f64,
    /// Steals per game
    pub steals: f64,
    /// Blocks per game
    pub blocks: f64,
    /// Turnovers per game
    pub turnovers: f64,
}

/// One line per skill area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaProgress {
    /// Points
    pub scoring: String,
    /// Assists
    pub playmaking: String,
    /// Steals and blocks
    pub defense: String,
    /// Turnovers
    pub ball_control: String,
    /// Rebounds
    pub rebounding: String,
}

/// Recent form report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentFormReport {
    /// Number of games analysed
    pub games_analyzed: usize,
    /// Averages, absent when no games were logged
    pub averages: Option<FormAverages>,
    /// One-sentence summary
    pub takeaway: String,
    /// Per-area progress lines
    pub progress: AreaProgress,
    /// Up to three next steps
    pub next_steps: Vec<String>,
}

const MAX_NEXT_STEPS: usize = 3;

/// Build the recent form report from the full game history
#[must_use]
pub fn recent_form_report(games: &[GameRecord], config: &IntelligenceConfig) -> RecentFormReport {
    if games.is_empty() {
        return empty_report();
    }

    let ordered = sorted_by_date(games);
    let recent = &ordered[ordered.len().saturating_sub(config.recent_form_games)..];
    let average = |metric: GameMetric| mean(recent, |game| metric.value_of(game));
    let averages = FormAverages {
        points: average(GameMetric::Points),
        assists: average(GameMetric::Assists),
        rebounds: average(GameMetric::Rebounds),
        steals: average(GameMetric::Steals),
        blocks: average(GameMetric::Blocks),
        turnovers: average(GameMetric::Turnovers),
    };

    let count = recent.len();
    let takeaway = format!(
        "You've played {count} {} with an average of {:.1} points per game. Keep up the great work!",
        if count == 1 { "game" } else { "games" },
        averages.points
    );

    let progress = AreaProgress {
        scoring: format!("Averaging {:.1} points per game", averages.points),
        playmaking: format!("Averaging {:.1} assists per game", averages.assists),
        defense: format!(
            "Averaging {:.1} steals and {:.1} blocks per game",
            averages.steals, averages.blocks
        ),
        ball_control: format!("Averaging {:.1} turnovers per game", averages.turnovers),
        rebounding: format!("Averaging {:.1} rebounds per game", averages.rebounds),
    };

    let mut next_steps = Vec::new();
    if averages.turnovers > config.focus.max_turnovers {
        next_steps.push("Work on reducing turnovers to improve ball control".to_owned());
    }
    if has_metric(recent, GameMetric::Assists) && averages.assists < config.focus.min_assists {
        next_steps.push("Look for open teammates to grow your playmaking".to_owned());
    }
    for generic in [
        "Continue tracking your games to identify trends",
        "Focus on consistency in your strongest areas",
        "Set specific goals for areas you want to improve",
    ] {
        if next_steps.len() >= MAX_NEXT_STEPS {
            break;
        }
        next_steps.push(generic.to_owned());
    }

    RecentFormReport {
        games_analyzed: count,
        averages: Some(averages),
        takeaway,
        progress,
        next_steps,
    }
}

fn has_metric(games: &[GameRecord], metric: GameMetric) -> bool {
    games.iter().any(|game| metric.value_of(game).is_some())
}

fn empty_report() -> RecentFormReport {
    let no_data =
        |area: &str| format!("No data yet - log your first game to see your {area} progress");
    RecentFormReport {
        games_analyzed: 0,
        averages: None,
        takeaway: "Start logging your games to get personalized insights and track your progress!"
            .to_owned(),
        progress: AreaProgress {
            scoring: no_data("scoring"),
            playmaking: no_data("playmaking"),
            defense: no_data("defensive"),
            ball_control: no_data("ball control"),
            rebounding: no_data("rebounding"),
        },
        next_steps: vec![
            "Log your first game to start tracking your performance".to_owned(),
            "Set specific goals for areas you want to improve".to_owned(),
            "Review your stats regularly to identify patterns".to_owned(),
        ],
    }
}
