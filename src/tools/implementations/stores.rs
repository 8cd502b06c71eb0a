// ABOUTME: Store read tools returning filtered, limited pages of stored records.
// ABOUTME: Implements read_feed, read_templates, and read_records.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::{json, Value};

use crate::constants::{json_fields, tools};
use crate::errors::AppResult;
use crate::stores::{FeedQuery, RecordQuery, TemplateQuery};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{decode, ReadFeedParams, ReadRecordsParams, ReadTemplatesParams};
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{RunlogTool, ToolCapabilities};

const WINDOW_PROPERTIES: [(&str, &str, &str); 3] = [
    (json_fields::LIMIT, "integer", "Maximum items returned (default 20)"),
    (json_fields::SINCE, "integer", "Inclusive lower bound on created_at, unix seconds"),
    (json_fields::UNTIL, "integer", "Inclusive upper bound on created_at, unix seconds"),
];

fn window_schema_with(extra: (&'static str, &'static str, &'static str)) -> JsonSchema {
    let mut properties = WINDOW_PROPERTIES.to_vec();
    properties.push(extra);
    JsonSchema::object(&properties, &[])
}

// ============================================================================
// ReadFeedTool
// ============================================================================

/// Tool for reading the note feed.
pub struct ReadFeedTool;

impl RunlogTool for ReadFeedTool {
    fn name(&self) -> &'static str {
        tools::READ_FEED
    }

    fn description(&self) -> &'static str {
        "Read recent notes from the feed, newest first"
    }

    fn input_schema(&self) -> JsonSchema {
        window_schema_with((
            json_fields::INCLUDE_WORKOUTS,
            "boolean",
            "Include workout notes (default true)",
        ))
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_STORE
    }

    fn execute(&self, args: Value, context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
        let params: ReadFeedParams = decode(self.name(), args)?;
        let page = context.stores.feed.query(&FeedQuery {
            window: params.window.window(context.default_limit),
            include_workouts: params.include_workouts.unwrap_or(true),
        });

        Ok(ToolResult::ok(json!({
            "feed": page.items,
            "total": page.total,
        })))
    }
}

// ============================================================================
// ReadTemplatesTool
// ============================================================================

/// Tool for reading exercise and workout templates.
pub struct ReadTemplatesTool;

impl RunlogTool for ReadTemplatesTool {
    fn name(&self) -> &'static str {
        tools::READ_TEMPLATES
    }

    fn description(&self) -> &'static str {
        "Read exercise and workout templates; both kinds merged newest first unless a type is given"
    }

    fn input_schema(&self) -> JsonSchema {
        window_schema_with((json_fields::TYPE, "string", "'exercise' or 'workout'"))
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_STORE
    }

    fn execute(&self, args: Value, context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
        let params: ReadTemplatesParams = decode(self.name(), args)?;
        let page = context.stores.templates.query(&TemplateQuery {
            window: params.window.window(context.default_limit),
            kind: params.kind(self.name())?,
        });

        Ok(ToolResult::ok(json!({
            "templates": page.items,
            "total": page.total,
        })))
    }
}

// ============================================================================
// ReadRecordsTool
// ============================================================================

/// Tool for reading workout records.
pub struct ReadRecordsTool;

impl RunlogTool for ReadRecordsTool {
    fn name(&self) -> &'static str {
        tools::READ_RECORDS
    }

    fn description(&self) -> &'static str {
        "Read workout records, newest first, optionally filtered by completion"
    }

    fn input_schema(&self) -> JsonSchema {
        window_schema_with((
            json_fields::COMPLETED,
            "boolean",
            "Only completed (true) or not completed (false) records",
        ))
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_STORE
    }

    fn execute(&self, args: Value, context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
        let params: ReadRecordsParams = decode(self.name(), args)?;
        let page = context.stores.records.query(&RecordQuery {
            window: params.window.window(context.default_limit),
            completed: params.completed,
        });

        Ok(ToolResult::ok(json!({
            "records": page.items,
            "total": page.total,
        })))
    }
}

// ============================================================================
// Tool Registration
// ============================================================================

/// Create all store read tools for registration
#[must_use]
pub fn create_store_tools() -> Vec<Box<dyn RunlogTool>> {
    vec![
        Box::new(ReadFeedTool),
        Box::new(ReadTemplatesTool),
        Box::new(ReadRecordsTool),
    ]
}
