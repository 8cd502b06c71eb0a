// ABOUTME: Defines ToolExecutionContext which gives operations read access to the stores.
// ABOUTME: Carries the configured default query limit and a request id for log correlation.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;
use uuid::Uuid;

use crate::stores::RecordStores;

/// Context provided to every tool execution.
///
/// Borrowing the stores immutably keeps a failed or read-only operation from
/// ever changing store state.
#[derive(Clone)]
pub struct ToolExecutionContext<'a> {
    /// Read-only view of the record stores
    pub stores: &'a RecordStores,
    /// Limit applied when a query omits `limit`
    pub default_limit: usize,
    /// Request ID for tracing/logging
    pub request_id: String,
}

impl<'a> ToolExecutionContext<'a> {
    /// Create a context with a freshly generated request id
    #[must_use]
    pub fn new(stores: &'a RecordStores, default_limit: usize) -> Self {
        Self {
            stores,
            default_limit,
            request_id: format!("req_{}", Uuid::new_v4().simple()),
        }
    }

    /// Use the caller's JSON-RPC id when there is one
    #[must_use]
    pub fn with_request_id(mut self, request_id: Option<&Value>) -> Self {
        if let Some(id) = request_id {
            self.request_id = match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
        self
    }

    /// Request id rendered for log fields
    #[must_use]
    pub fn request_id_str(&self) -> &str {
        &self.request_id
    }
}
