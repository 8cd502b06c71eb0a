// ABOUTME: Core types and constants for the runlog activity-note platform
// ABOUTME: Foundation crate with error handling, query windows, models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlog Core
//!
//! Foundation crate providing shared types and constants for runlog. This crate
//! is designed to change infrequently, enabling incremental compilation benefits
//! in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Unit factors, vocabularies, event kinds, and store limits
//! - **models**: Measurement sets, activities, summaries, and inbound events
//! - **pagination**: Time-window query filters and result pages for the record stores

/// Unified error handling system with standard error codes and failure envelopes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MeasurementSet`, `Activity`, `ActivitySummary`, `InboundEvent`)
pub mod models;

/// Time-window query filters and pages for bounded store reads
pub mod pagination;
