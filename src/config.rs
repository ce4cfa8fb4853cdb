// ABOUTME: Environment-based application configuration for Courtside
// ABOUTME: Combines logging settings with intelligence thresholds loaded from COURTSIDE_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::LoggingConfig;
use courtside_core::errors::AppResult;
use courtside_intelligence::IntelligenceConfig;

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Analytics thresholds
    pub intelligence: IntelligenceConfig,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a `COURTSIDE_*` variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            logging: LoggingConfig::from_env(),
            intelligence: IntelligenceConfig::from_environment()?,
        })
    }
}
