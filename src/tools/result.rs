// ABOUTME: Defines ToolResult, the value returned by a successful operation.
// ABOUTME: Bridges typed operation outputs to the JSON returned over the transport.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppResult;

/// Result returned by tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// The result value to return to the caller
    pub content: Value,
}

impl ToolResult {
    /// Create a successful result with just content
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self { content }
    }

    /// Create a result from a serializable value
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value cannot be converted to JSON
    pub fn from_serializable<T: Serialize>(value: &T) -> AppResult<Self> {
        Ok(Self::ok(serde_json::to_value(value)?))
    }

    /// Consume the result, returning its JSON content
    #[must_use]
    pub fn into_content(self) -> Value {
        self.content
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}
