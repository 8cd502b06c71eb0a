// ABOUTME: Analytics tools that aggregate activities into summaries.
// ABOUTME: Implements summarize_activities (caller list) and summarize_records (stored workouts).
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Analytics Tools
//!
//! - `SummarizeActivitiesTool` - totals, averages, bests, histogram and trend over supplied activities
//! - `SummarizeRecordsTool` - the same summary over workout records held in the record store

use runlog_core::models::Activity;
use runlog_intelligence::summarize;
use serde_json::Value;
use tracing::debug;

use crate::constants::{json_fields, tools};
use crate::errors::{AppResult, ToolError};
use crate::stores::RecordQuery;
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{decode, ReadRecordsParams, SummarizeActivitiesParams};
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{RunlogTool, ToolCapabilities};

// ============================================================================
// SummarizeActivitiesTool
// ============================================================================

/// Tool for summarizing caller-supplied activities.
pub struct SummarizeActivitiesTool;

impl RunlogTool for SummarizeActivitiesTool {
    fn name(&self) -> &'static str {
        tools::SUMMARIZE_ACTIVITIES
    }

    fn description(&self) -> &'static str {
        "Aggregate activities into totals, averages, personal bests, a distance histogram and a pace trend"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[(
                json_fields::ACTIVITIES,
                "array",
                "Activities as {timestamp?, extractedData}",
            )],
            &[json_fields::ACTIVITIES],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::ANALYTICS
    }

    fn execute(&self, args: Value, _context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
        let params: SummarizeActivitiesParams = decode(self.name(), args)?;
        let activities = params
            .activities
            .ok_or_else(|| ToolError::missing_parameter(self.name(), json_fields::ACTIVITIES))?;

        ToolResult::from_serializable(&summarize(&activities)?)
    }
}

// ============================================================================
// SummarizeRecordsTool
// ============================================================================

/// Tool for summarizing stored workout records.
pub struct SummarizeRecordsTool;

impl RunlogTool for SummarizeRecordsTool {
    fn name(&self) -> &'static str {
        tools::SUMMARIZE_RECORDS
    }

    fn description(&self) -> &'static str {
        "Summarize workout records held in the record store, optionally filtered by time window and completion"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[
                (json_fields::LIMIT, "integer", "Maximum records to include (default: all)"),
                (json_fields::SINCE, "integer", "Inclusive lower bound on created_at"),
                (json_fields::UNTIL, "integer", "Inclusive upper bound on created_at"),
                (json_fields::COMPLETED, "boolean", "Only completed (true) or not completed (false)"),
            ],
            &[],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::ANALYTICS | ToolCapabilities::READS_STORE
    }

    fn execute(&self, args: Value, context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
        let params: ReadRecordsParams = decode(self.name(), args)?;
        let page = context.stores.records.query(&RecordQuery {
            window: params.window.window(usize::MAX),
            completed: params.completed,
        });

        let activities: Vec<Activity> = page.items.iter().map(|r| r.to_activity()).collect();
        debug!(
            records = activities.len(),
            request_id = %context.request_id_str(),
            "summarizing stored workout records"
        );

        ToolResult::from_serializable(&summarize(&activities)?)
    }
}

// ============================================================================
// Tool Registration
// ============================================================================

/// Create all analytics tools for registration
#[must_use]
pub fn create_analytics_tools() -> Vec<Box<dyn RunlogTool>> {
    vec![
        Box::new(SummarizeActivitiesTool),
        Box::new(SummarizeRecordsTool),
    ]
}
