// ABOUTME: Main library entry point for the Courtside performance analytics engine
// ABOUTME: Wires the record store, insight service, dataset loading, config, and logging together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Courtside
//!
//! Performance analytics and insights for young athletes. Logged games and
//! training sessions are turned into period summaries (narrative insights,
//! trend improvements, focus areas, a motivational message), an always-on
//! dashboard, and a recent form report.
//!
//! ## Architecture
//!
//! - **`courtside_core`**: record models, error types, and constants
//! - **`courtside_intelligence`**: pure analytics (windowing, aggregates,
//!   trend comparison, insight synthesis, dashboard aggregation)
//! - **Store**: owner-scoped record storage behind an async trait
//! - **Services**: loads records from a store and runs the analytics
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use courtside::models::Period;
//! use courtside::services::InsightService;
//! use courtside::store::InMemoryStore;
//! use courtside::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryStore::new());
//!     let service = InsightService::new(store, Default::default());
//!     let result = service.generate_insights("athlete-1", Period::Weekly).await?;
//!     println!("{}", result.stored.summary.motivational_message);
//!     Ok(())
//! }
//! ```

/// Application configuration from the environment
pub mod config;

/// Dataset files and store seeding
pub mod dataset;

/// Unified error types
pub mod errors;

/// Tracing subscriber setup
pub mod logging;

/// Insight, dashboard, and recent form services
pub mod services;

/// Record store abstraction and in-memory implementation
pub mod store;

pub use courtside_core::constants;
pub use courtside_core::models;
pub use courtside_intelligence as intelligence;
