// ABOUTME: Error handling re-exports for the runlog server crate
// ABOUTME: Unified AppError, ErrorCode, ToolError, and failure envelopes from the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! All server errors use the core crate's `AppError`. Domain failures from the
//! intelligence crate (`ExtractionError`, `SummaryError`) convert into it with `?`.

pub use runlog_core::errors::{
    AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails, ToolError,
};
