// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Metric vocabulary keys and service identifiers for Courtside
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identifiers used in structured logging
pub mod service_names {
    /// Service name for the Courtside analytics service
    pub const COURTSIDE: &str = "courtside";
}

/// Known training metric keys.
///
/// Training sessions report metrics as a free-form map. These are the keys the
/// analytics engine understands; any other key is preserved but ignored.
pub mod training_metrics {
    /// Free throw shooting percentage (0-100)
    pub const FREE_THROW_PERCENTAGE: &str = "freeThrowPercentage";
    /// Three-point shooting percentage (0-100)
    pub const THREE_POINT_PERCENTAGE: &str = "threePointPercentage";
    /// Sprint speed
    pub const SPEED: &str = "speed";
    /// Agility drill score
    pub const AGILITY: &str = "agility";
    /// Vertical jump height
    pub const VERTICAL: &str = "vertical";
    /// Reaction time
    pub const REACTION_TIME: &str = "reactionTime";
    /// Session duration in minutes (training volume)
    pub const DURATION_MINUTES: &str = "durationMinutes";

    /// Every key in the known vocabulary
    pub const KNOWN: &[&str] = &[
        FREE_THROW_PERCENTAGE,
        THREE_POINT_PERCENTAGE,
        SPEED,
        AGILITY,
        VERTICAL,
        REACTION_TIME,
        DURATION_MINUTES,
    ];

    /// Whether a key belongs to the known vocabulary
    #[must_use]
    pub fn is_known(key: &str) -> bool {
        KNOWN.contains(&key)
    }
}

/// Time constants
pub mod time {
    /// Days in the weekly reporting window
    pub const DAYS_PER_WEEK: i64 = 7;
}
