// ABOUTME: Unified error handling for the Courtside application crate
// ABOUTME: Re-exports the core error types so binaries and tests use one import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error types shared across the workspace

pub use courtside_core::errors::{
    AppError, AppResult, ErrorCode, InvalidRecordError, RecordKind,
};
pub use courtside_intelligence::ConfigError;
