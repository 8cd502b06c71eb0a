// ABOUTME: Type-safe parameter structs for each operation, decoded from JSON arguments
// ABOUTME: Shape errors become InvalidParameter failures naming the offending operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Operation Parameters
//!
//! Arguments arrive as untyped JSON. Each operation decodes them into one of
//! the structs below with serde instead of walking `Value` by hand, so a
//! wrongly typed argument fails fast with a message that names the field.
//! Absent or `null` arguments decode as an empty object.

use runlog_core::models::Activity;
use runlog_core::pagination::QueryWindow;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::constants::limits::{DEFAULT_SINCE, DEFAULT_UNTIL};
use crate::errors::{AppError, AppResult, ToolError};
use crate::stores::TemplateKind;

/// Decode `args` into `T` for operation `tool_name`
///
/// # Errors
///
/// Returns `ToolError::InvalidParameter` when the arguments do not match `T`
pub fn decode<T: DeserializeOwned>(tool_name: &str, args: Value) -> AppResult<T> {
    let args = if args.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| {
        AppError::from(ToolError::invalid_parameter(
            tool_name,
            "arguments",
            e.to_string(),
        ))
    })
}

/// `limit`, `since`, `until` shared by every store read
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WindowParams {
    /// Maximum number of items
    pub limit: Option<usize>,
    /// Inclusive lower bound on `created_at`
    pub since: Option<i64>,
    /// Inclusive upper bound on `created_at`
    pub until: Option<i64>,
}

impl WindowParams {
    /// Resolve into a query window, filling gaps with defaults
    #[must_use]
    pub fn window(&self, default_limit: usize) -> QueryWindow {
        QueryWindow {
            since: self.since.unwrap_or(DEFAULT_SINCE),
            until: self.until.unwrap_or(DEFAULT_UNTIL),
            limit: self.limit.unwrap_or(default_limit),
        }
    }
}

/// `parse_note` arguments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseNoteParams {
    /// Note body; absent is treated as empty
    pub content: Option<String>,
}

/// `parse_feed_entry` arguments
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntryParams {
    /// Feed entry id
    pub id: Option<String>,
}

/// `summarize_activities` arguments
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeActivitiesParams {
    /// Activities to aggregate
    pub activities: Option<Vec<Activity>>,
}

/// `read_feed` arguments
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReadFeedParams {
    /// Time window and limit
    #[serde(flatten)]
    pub window: WindowParams,
    /// Include workout notes, default `true`
    pub include_workouts: Option<bool>,
}

/// `read_templates` arguments
#[derive(Debug, Clone, Deserialize)]
pub struct ReadTemplatesParams {
    /// Time window and limit
    #[serde(flatten)]
    pub window: WindowParams,
    /// `exercise` or `workout`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl ReadTemplatesParams {
    /// Parse the kind filter
    ///
    /// # Errors
    ///
    /// Returns `ToolError::InvalidParameter` for a kind other than `exercise` or `workout`
    pub fn kind(&self, tool_name: &str) -> AppResult<Option<TemplateKind>> {
        self.kind
            .as_deref()
            .map(|value| {
                TemplateKind::parse(value).ok_or_else(|| {
                    AppError::from(ToolError::invalid_parameter(
                        tool_name,
                        "type",
                        format!("expected 'exercise' or 'workout', got '{value}'"),
                    ))
                })
            })
            .transpose()
    }
}

/// `read_records` and `summarize_records` arguments
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReadRecordsParams {
    /// Time window and limit
    #[serde(flatten)]
    pub window: WindowParams,
    /// Completion filter
    pub completed: Option<bool>,
}
