// ABOUTME: Defines the RunlogTool trait and ToolCapabilities for the pluggable operation architecture.
// ABOUTME: Operations implement this trait to be registered and executed via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Trait and Capabilities
//!
//! Every named operation of the dispatch facade implements `RunlogTool`:
//! - Metadata (name, description, input schema) for `tools/list`
//! - Capability flags for grouping and logging
//! - Synchronous execution against a read-only view of the stores
//!
//! Execution never mutates the stores. Ingestion goes through the engine,
//! which owns the stores mutably.

use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::JsonSchema;

bitflags! {
    /// Capabilities that tools declare for discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool parses free text into measurements
        const PARSES_TEXT = 0b0000_0001;
        /// Tool reads one of the record stores
        const READS_STORE = 0b0000_0010;
        /// Tool performs aggregation or statistics
        const ANALYTICS = 0b0000_0100;
    }
}

impl ToolCapabilities {
    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if self.contains(Self::PARSES_TEXT) {
            parts.push("parses_text");
        }
        if self.contains(Self::READS_STORE) {
            parts.push("reads_store");
        }
        if self.contains(Self::ANALYTICS) {
            parts.push("analytics");
        }

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait that every dispatchable operation implements.
///
/// # Example
///
/// ```rust,no_run
/// use runlog_server::errors::AppResult;
/// use runlog_server::tools::schema::JsonSchema;
/// use runlog_server::tools::{RunlogTool, ToolCapabilities, ToolExecutionContext, ToolResult};
/// use serde_json::Value;
///
/// struct CountFeedTool;
///
/// impl RunlogTool for CountFeedTool {
///     fn name(&self) -> &'static str {
///         "count_feed"
///     }
///
///     fn description(&self) -> &'static str {
///         "Count notes held in the feed"
///     }
///
///     fn input_schema(&self) -> JsonSchema {
///         JsonSchema::object(&[], &[])
///     }
///
///     fn capabilities(&self) -> ToolCapabilities {
///         ToolCapabilities::READS_STORE
///     }
///
///     fn execute(&self, _args: Value, context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
///         Ok(ToolResult::ok(serde_json::json!({ "count": context.stores.feed.len() })))
///     }
/// }
/// ```
pub trait RunlogTool: Send + Sync {
    /// Unique operation name (e.g., `parse_note`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters, returned in `tools/list`
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the operation with the given arguments
    ///
    /// # Errors
    ///
    /// Returns `AppError` for invalid parameters, missing records, or
    /// extraction and aggregation failures
    fn execute(&self, args: Value, context: &ToolExecutionContext<'_>) -> AppResult<ToolResult>;
}
