// ABOUTME: Core types and constants for the Courtside performance analytics platform
// ABOUTME: Foundation crate with error handling, record models, and metric vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Courtside Core
//!
//! Foundation crate providing shared types and constants for the Courtside
//! analytics platform. Everything here is plain data: the analytics engine in
//! `courtside-intelligence` and the service layer in the main crate build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `InvalidRecordError`
//! - **constants**: Metric vocabulary and service identifiers
//! - **models**: Game, training and goal records plus the produced `InsightSummary`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (records, periods, summaries)
pub mod models;
