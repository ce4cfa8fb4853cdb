// ABOUTME: Domain service layer wiring the record store to the analytics engine
// ABOUTME: Loads owner records, validates them, and runs insight, dashboard, and form analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are protocol-agnostic: the CLI and tests call them directly, and
//! any future transport would too.

/// Insight, dashboard, and recent form operations over a record store
pub mod insights;

pub use insights::{DashboardView, FormView, GeneratedInsights, InsightService, LoadedRecords};
