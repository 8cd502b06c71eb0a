// ABOUTME: Tool-specific error types for the operation dispatch facade
// ABOUTME: Provides structured errors that convert into the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Error Types
//!
//! Provides structured error types for dispatch operations:
//! - `ToolError` - Errors specific to tool lookup and argument handling
//! - Conversion to `AppError` for the caller-visible failure envelope

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Errors specific to tool operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// No tool is registered under the requested name
    NotFound {
        /// Name of the requested tool
        tool_name: String,
    },
    /// Tool parameter validation failed
    InvalidParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Reason the parameter is invalid
        reason: String,
    },
    /// Required parameter is missing
    MissingParameter {
        /// Name of the tool
        tool_name: String,
        /// Name of the missing parameter
        parameter: String,
    },
}

impl ToolError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::NotFound {
            tool_name: tool_name.into(),
        }
    }

    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        tool_name: impl Into<String>,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub fn missing_parameter(tool_name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            tool_name: tool_name.into(),
            parameter: parameter.into(),
        }
    }

    /// Get the tool name associated with this error
    #[must_use]
    pub fn tool_name(&self) -> &str {
        match self {
            Self::NotFound { tool_name }
            | Self::InvalidParameter { tool_name, .. }
            | Self::MissingParameter { tool_name, .. } => tool_name,
        }
    }

    /// Error code this failure maps to in the unified system
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotFound { .. } => ErrorCode::UnknownOperation,
            Self::InvalidParameter { .. } => ErrorCode::InvalidFormat,
            Self::MissingParameter { .. } => ErrorCode::MissingRequiredField,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { tool_name } => {
                write!(f, "Operation '{tool_name}' is not registered")
            }
            Self::InvalidParameter {
                tool_name,
                parameter,
                reason,
            } => {
                write!(
                    f,
                    "Invalid parameter '{parameter}' for operation '{tool_name}': {reason}"
                )
            }
            Self::MissingParameter {
                tool_name,
                parameter,
            } => {
                write!(
                    f,
                    "Missing required parameter '{parameter}' for operation '{tool_name}'"
                )
            }
        }
    }
}

impl Error for ToolError {}

impl From<ToolError> for AppError {
    fn from(error: ToolError) -> Self {
        let details = match &error {
            ToolError::InvalidParameter { parameter, .. }
            | ToolError::MissingParameter { parameter, .. } => serde_json::json!({
                "operation": error.tool_name(),
                "parameter": parameter,
            }),
            ToolError::NotFound { .. } => serde_json::json!({ "operation": error.tool_name() }),
        };
        Self::new(error.error_code(), error.to_string()).with_details(details)
    }
}
