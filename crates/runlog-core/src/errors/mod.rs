// ABOUTME: Unified error handling with error codes, AppError, and caller-visible failure envelopes
// ABOUTME: Every extraction, aggregation, and dispatch failure funnels through AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for runlog.
//! It defines standard error codes, the `AppError` type, and the `ErrorResponse`
//! envelope that transports hand back to callers unchanged.

/// Tool dispatch errors (unknown operation, bad parameters)
pub mod tool;

pub use tool::ToolError;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required parameter was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A parameter was supplied with the wrong shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Extraction was asked to parse absent or empty text
    #[serde(rename = "EMPTY_INPUT")]
    EmptyInput = 3010,
    /// Aggregation was asked to summarize no activities
    #[serde(rename = "EMPTY_ACTIVITY_LIST")]
    EmptyActivityList = 3011,

    // Resource Management (4000-4999)
    /// The requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// The facade has no operation registered under the given name
    #[serde(rename = "UNKNOWN_OPERATION")]
    UnknownOperation = 4010,

    // Configuration (6000-6999)
    /// Configuration value could not be parsed or is out of range
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// JSON encoding or decoding failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::EmptyInput => "No text was provided for extraction",
            Self::EmptyActivityList => "No activities were provided for summarization",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::UnknownOperation => "The requested operation is not registered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// JSON-RPC 2.0 error code used when this error crosses a transport
    #[must_use]
    pub const fn jsonrpc_code(&self) -> i32 {
        match self {
            Self::UnknownOperation => -32601,
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::EmptyInput
            | Self::EmptyActivityList => -32602,
            Self::ResourceNotFound => -32004,
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError => -32603,
        }
    }

    /// Whether the failure was caused by the caller's request rather than the server
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        (*self as u16) < 5000
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details for the failure envelope
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Add details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("JSON processing failed: {error}"),
        )
        .with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Caller-visible failure envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Failure details
    pub error: ErrorResponseDetails,
}

/// Body of an `ErrorResponse`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional structured details
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}
