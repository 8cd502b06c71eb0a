// ABOUTME: JSON-RPC 2.0 request, response, and error types for the stdio transport
// ABOUTME: Maps AppError failures onto JSON-RPC error objects carrying the failure envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # JSON-RPC 2.0 messages
//!
//! Requests are only ever decoded and responses only ever encoded, so each
//! type derives the one serde direction it needs.
//!
//! ```rust
//! use runlog_server::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
//! # use serde_json::json;
//!
//! let request: JsonRpcRequest =
//!     serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"})).unwrap();
//! assert!(!request.is_notification());
//!
//! let response = JsonRpcResponse::error(request.id, error_codes::METHOD_NOT_FOUND, "nope");
//! assert_eq!(serde_json::to_value(&response).unwrap()["error"]["code"], -32601);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{AppError, ErrorResponse};

/// Protocol version accepted and emitted
pub const JSONRPC_VERSION: &str = "2.0";

/// Inbound request or notification
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Must equal `JSONRPC_VERSION`; checked by the handler
    pub jsonrpc: String,
    /// Method to route on
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Option<Value>,
    /// Correlation id; absent for notifications
    #[serde(default)]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications carry no id and get no reply
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Outbound response. Exactly one of `result` or `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    /// Always `JSONRPC_VERSION`
    pub jsonrpc: &'static str,
    /// Successful result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    /// Echo of the request id, `null` when it could not be read
    pub id: Option<Value>,
}

/// Error member of a response
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    /// Numeric code from `error_codes` or `ErrorCode::jsonrpc_code`
    pub code: i32,
    /// Human-readable message
    pub message: String,
    /// `ErrorResponse` envelope for application failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Successful response
    #[must_use]
    pub const fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Protocol-level failure with no envelope
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self::failure(
            id,
            JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        )
    }

    /// Application failure; `data` carries the `ErrorResponse` envelope
    #[must_use]
    pub fn from_app_error(id: Option<Value>, error: AppError) -> Self {
        let code = error.code.jsonrpc_code();
        let message = error.to_string();
        let data = serde_json::to_value(ErrorResponse::from(error)).ok();
        Self::failure(id, JsonRpcError { code, message, data })
    }

    const fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            result: None,
            error: Some(error),
            id,
        }
    }
}

/// Protocol error codes used by the transport
pub mod error_codes {
    /// Line is not valid JSON or not UTF-8
    pub const PARSE_ERROR: i32 = -32700;
    /// JSON is not a valid 2.0 request
    pub const INVALID_REQUEST: i32 = -32600;
    /// Unknown method or operation
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Parameters failed to decode or validate
    pub const INVALID_PARAMS: i32 = -32602;
}
