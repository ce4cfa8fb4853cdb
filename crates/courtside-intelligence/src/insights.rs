// ABOUTME: Insight synthesizer producing period summaries from games, training, and goals
// ABOUTME: Orchestrates windowing, trend comparison, focus-area rules, and message selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for one athlete and reporting period
//!
//! Generation is a pure function of its inputs and the evaluation time.
//! Empty or sparse data never fails: each section simply stays empty.

use crate::aggregates::{mean, sample_count};
use crate::config::IntelligenceConfig;
use crate::period::{sorted_by_date, PeriodWindow};
use chrono::{DateTime, Utc};
use courtside_core::constants::training_metrics;
use courtside_core::models::{
    GameRecord, GoalRecord, GoalStatus, Improvement, InsightSummary, Period, TrainingRecord,
    TrendDirection,
};
use tracing::debug;

/// Fixed message texts
pub mod messages {
    /// At least one metric improved
    pub const PROGRESS: &str =
        "You're making great progress! Keep up the hard work and stay focused on your goals.";
    /// Activity logged but no improvement detected
    pub const CONSISTENCY: &str =
        "Consistency is key! Keep showing up and putting in the work - results will follow.";
    /// Nothing logged in the period
    pub const GET_STARTED: &str =
        "Ready to get started? Log your games and training to track your progress!";

    /// Turnovers above the bar
    pub const BALL_HANDLING: &str =
        "Ball handling - work on reducing turnovers through control drills";
    /// Assists below the bar
    pub const PLAYMAKING: &str = "Playmaking - focus on court vision and passing drills";
    /// Three-point percentage below the bar
    pub const THREE_POINT_SHOOTING: &str =
        "Three-point shooting - increase practice volume and focus on form";
}

/// Insight generator for period summaries
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    config: IntelligenceConfig,
}

impl InsightGenerator {
    /// Create a new insight generator with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new insight generator with custom thresholds
    #[must_use]
    pub const fn with_config(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Generate a summary for the period ending now
    #[must_use]
    pub fn generate(
        &self,
        games: &[GameRecord],
        sessions: &[TrainingRecord],
        goals: &[GoalRecord],
        period: Period,
    ) -> InsightSummary {
        self.generate_at(games, sessions, goals, period, Utc::now())
    }

    /// Generate a summary for the period ending at `now`
    #[must_use]
    pub fn generate_at(
        &self,
        games: &[GameRecord],
        sessions: &[TrainingRecord],
        goals: &[GoalRecord],
        period: Period,
        now: DateTime<Utc>,
    ) -> InsightSummary {
        let window = PeriodWindow::ending_at(period, now);
        let period_games = sorted_by_date(&window.filter(games));
        let period_sessions = sorted_by_date(&window.filter(sessions));

        debug!(
            period = %period,
            games = period_games.len(),
            sessions = period_sessions.len(),
            "generating insights"
        );

        let insights = Self::narrative_insights(&period_games, &period_sessions, period);
        let improvements = self.improvements(&period_games, &period_sessions, period);
        let mut focus_areas = self.focus_areas(&period_games, &period_sessions);
        if self.config.focus.goal_focus_enabled {
            focus_areas.extend(Self::goal_focus_areas(goals, &window));
        }
        let motivational_message =
            Self::motivational_message(&improvements, &period_games, &period_sessions);

        InsightSummary {
            period,
            window_start: window.start,
            window_end: window.end,
            generated_at: now,
            insights,
            improvements,
            focus_areas,
            motivational_message: motivational_message.to_owned(),
        }
    }

    /// Plain activity facts; silent for empty collections
    fn narrative_insights(
        games: &[GameRecord],
        sessions: &[TrainingRecord],
        period: Period,
    ) -> Vec<String> {
        let mut insights = Vec::new();

        if !games.is_empty() {
            let count = games.len();
            insights.push(format!(
                "You played {count} {} this {}.",
                if count == 1 { "game" } else { "games" },
                period.noun()
            ));

            let points = |game: &GameRecord| game.points.map(f64::from);
            if sample_count(games, points) > 0 {
                insights.push(format!(
                    "You averaged {:.1} points per game.",
                    mean(games, points)
                ));
            }
        }

        if !sessions.is_empty() {
            let count = sessions.len();
            insights.push(format!(
                "You completed {count} training {} - excellent dedication!",
                if count == 1 { "session" } else { "sessions" }
            ));
        }

        insights
    }

    /// Significant trend changes for every tracked metric, in configured order
    fn improvements(
        &self,
        games: &[GameRecord],
        sessions: &[TrainingRecord],
        period: Period,
    ) -> Vec<Improvement> {
        self.config
            .tracked_metrics
            .iter()
            .filter_map(|metric| {
                let result = metric.compare(games, sessions, &self.config.trend)?;
                let change = result.delta.round() as i64;
                debug!(
                    metric = %metric,
                    delta = result.delta,
                    direction = ?result.direction,
                    "significant trend detected"
                );
                Some(Improvement {
                    metric: metric.display_name().to_owned(),
                    change,
                    change_kind: result.change_kind,
                    direction: result.direction,
                    description: metric.describe(result.direction, change, period),
                })
            })
            .collect()
    }

    /// Threshold-triggered advice over period data; missing data never triggers advice
    fn focus_areas(&self, games: &[GameRecord], sessions: &[TrainingRecord]) -> Vec<String> {
        let thresholds = &self.config.focus;
        let mut focus_areas = Vec::new();

        let turnovers = |game: &GameRecord| game.turnovers.map(f64::from);
        if sample_count(games, turnovers) > 0 && mean(games, turnovers) > thresholds.max_turnovers
        {
            focus_areas.push(messages::BALL_HANDLING.to_owned());
        }

        let assists = |game: &GameRecord| game.assists.map(f64::from);
        if sample_count(games, assists) > 0 && mean(games, assists) < thresholds.min_assists {
            focus_areas.push(messages::PLAYMAKING.to_owned());
        }

        let three_point =
            |session: &TrainingRecord| session.metric(training_metrics::THREE_POINT_PERCENTAGE);
        if sample_count(sessions, three_point) > 0
            && mean(sessions, three_point) < thresholds.min_three_point_percentage
        {
            focus_areas.push(messages::THREE_POINT_SHOOTING.to_owned());
        }

        focus_areas
    }

    /// Active goals still short of target whose end date has not passed the window start
    fn goal_focus_areas(goals: &[GoalRecord], window: &PeriodWindow) -> Vec<String> {
        goals
            .iter()
            .filter(|goal| goal.status == GoalStatus::Active && goal.end_date >= window.start)
            .filter_map(|goal| {
                let (current, target) = (goal.current_value?, goal.target_value?);
                if current >= target {
                    return None;
                }
                let unit = goal
                    .metric
                    .as_deref()
                    .filter(|unit| !unit.trim().is_empty())
                    .map_or_else(String::new, |unit| format!(" {unit}"));
                Some(format!(
                    "Goal in progress: {} ({current}/{target}{unit})",
                    goal.title
                ))
            })
            .collect()
    }

    /// Decision table: improvement, then any activity, then the call to action
    fn motivational_message(
        improvements: &[Improvement],
        games: &[GameRecord],
        sessions: &[TrainingRecord],
    ) -> &'static str {
        if improvements
            .iter()
            .any(|improvement| improvement.direction == TrendDirection::Improved)
        {
            messages::PROGRESS
        } else if !games.is_empty() || !sessions.is_empty() {
            messages::CONSISTENCY
        } else {
            messages::GET_STARTED
        }
    }
}
