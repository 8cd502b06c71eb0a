// ABOUTME: Note parsing tools that run the field extractor over free text.
// ABOUTME: Implements parse_note (caller text) and parse_feed_entry (stored feed note).
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Note Tools
//!
//! - `ParseNoteTool` - extract measurements from caller-supplied text
//! - `ParseFeedEntryTool` - extract measurements from a note already in the feed

use runlog_core::models::MeasurementSet;
use runlog_intelligence::extract;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::constants::{json_fields, tools};
use crate::errors::{AppError, AppResult, ToolError};
use crate::tools::context::ToolExecutionContext;
use crate::tools::params::{decode, FeedEntryParams, ParseNoteParams};
use crate::tools::result::ToolResult;
use crate::tools::schema::JsonSchema;
use crate::tools::traits::{RunlogTool, ToolCapabilities};

/// Output of both note tools
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ParsedNote<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    raw_content: &'a str,
    extracted_data: MeasurementSet,
}

// ============================================================================
// ParseNoteTool
// ============================================================================

/// Tool for extracting measurements from free text.
pub struct ParseNoteTool;

impl RunlogTool for ParseNoteTool {
    fn name(&self) -> &'static str {
        tools::PARSE_NOTE
    }

    fn description(&self) -> &'static str {
        "Extract distance, duration, pace, elevation, heart rate, weather and mood from a free-text activity note"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[(json_fields::CONTENT, "string", "Free-text activity note")],
            &[json_fields::CONTENT],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PARSES_TEXT
    }

    fn execute(&self, args: Value, _context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
        let params: ParseNoteParams = decode(self.name(), args)?;
        let content = params.content.unwrap_or_default();
        let extracted_data = extract(&content)?;

        ToolResult::from_serializable(&ParsedNote {
            id: None,
            raw_content: &content,
            extracted_data,
        })
    }
}

// ============================================================================
// ParseFeedEntryTool
// ============================================================================

/// Tool for extracting measurements from a stored feed note.
pub struct ParseFeedEntryTool;

impl RunlogTool for ParseFeedEntryTool {
    fn name(&self) -> &'static str {
        tools::PARSE_FEED_ENTRY
    }

    fn description(&self) -> &'static str {
        "Extract measurements from a note already held in the feed, looked up by id"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            &[(json_fields::ID, "string", "Feed entry id")],
            &[json_fields::ID],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::PARSES_TEXT | ToolCapabilities::READS_STORE
    }

    fn execute(&self, args: Value, context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
        let params: FeedEntryParams = decode(self.name(), args)?;
        let id = params
            .id
            .ok_or_else(|| ToolError::missing_parameter(self.name(), json_fields::ID))?;

        let entry = context
            .stores
            .feed
            .get(&id)
            .ok_or_else(|| AppError::not_found(format!("Feed entry {id}")))?;
        debug!(id = %id, request_id = %context.request_id_str(), "parsing stored feed entry");

        let extracted_data = extract(&entry.content)?;
        ToolResult::from_serializable(&ParsedNote {
            id: Some(&entry.id),
            raw_content: &entry.content,
            extracted_data,
        })
    }
}

// ============================================================================
// Tool Registration
// ============================================================================

/// Create all note tools for registration
#[must_use]
pub fn create_note_tools() -> Vec<Box<dyn RunlogTool>> {
    vec![Box::new(ParseNoteTool), Box::new(ParseFeedEntryTool)]
}

#[cfg(test)]
mod tests {
    use runlog_core::models::{InboundEvent, Tag};
    use serde_json::json;

    use super::*;
    use crate::config::StoreLimits;
    use crate::constants::kinds;
    use crate::errors::ErrorCode;
    use crate::stores::RecordStores;

    fn stores_with_note() -> RecordStores {
        let mut stores = RecordStores::new(&StoreLimits::default());
        stores.ingest(&InboundEvent {
            id: "note1".to_owned(),
            pubkey: "abcdef0123456789".to_owned(),
            created_at: 1_709_280_000,
            kind: kinds::TEXT_NOTE,
            content: "Ran 10 km in 50:00, felt great".to_owned(),
            tags: vec![Tag::new("t", ["running"])],
        });
        stores
    }

    #[test]
    fn test_parse_note_output_shape() {
        let stores = RecordStores::new(&StoreLimits::default());
        let context = ToolExecutionContext::new(&stores, 20);
        let result = ParseNoteTool
            .execute(json!({ "content": "Easy 5 km run" }), &context)
            .unwrap();
        assert_eq!(result.content["rawContent"], "Easy 5 km run");
        assert_eq!(result.content["extractedData"]["distance"]["unit"], "km");
        assert!(result.content.get("id").is_none());
    }

    #[test]
    fn test_parse_note_missing_content_is_empty_input() {
        let stores = RecordStores::new(&StoreLimits::default());
        let context = ToolExecutionContext::new(&stores, 20);
        let error = ParseNoteTool.execute(json!({}), &context).unwrap_err();
        assert_eq!(error.code, ErrorCode::EmptyInput);
    }

    #[test]
    fn test_parse_feed_entry_reads_stored_note() {
        let stores = stores_with_note();
        let context = ToolExecutionContext::new(&stores, 20);
        let result = ParseFeedEntryTool
            .execute(json!({ "id": "note1" }), &context)
            .unwrap();
        assert_eq!(result.content["id"], "note1");
        assert_eq!(result.content["extractedData"]["calculatedPace"]["formatted"], "5:00/km");
        assert_eq!(result.content["extractedData"]["mood"], json!(["great"]));
    }

    #[test]
    fn test_parse_feed_entry_unknown_id() {
        let stores = stores_with_note();
        let context = ToolExecutionContext::new(&stores, 20);
        let error = ParseFeedEntryTool
            .execute(json!({ "id": "nope" }), &context)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);

        let error = ParseFeedEntryTool.execute(json!({}), &context).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
    }
}
