// ABOUTME: Application constants re-exported from the core crate
// ABOUTME: Units, vocabularies, event kinds, store limits, and tool names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module

pub use runlog_core::constants::{kinds, limits, service_names, summary, units, vocabulary};

/// Operation names accepted by the dispatch facade
pub mod tools {
    /// Extract measurements from free text
    pub const PARSE_NOTE: &str = "parse_note";
    /// Extract measurements from a stored feed entry
    pub const PARSE_FEED_ENTRY: &str = "parse_feed_entry";
    /// Summarize caller-supplied activities
    pub const SUMMARIZE_ACTIVITIES: &str = "summarize_activities";
    /// Summarize stored workout records
    pub const SUMMARIZE_RECORDS: &str = "summarize_records";
    /// Read the note feed
    pub const READ_FEED: &str = "read_feed";
    /// Read exercise and workout templates
    pub const READ_TEMPLATES: &str = "read_templates";
    /// Read workout records
    pub const READ_RECORDS: &str = "read_records";
}

/// JSON argument names shared by several operations
pub mod json_fields {
    /// Free-text note body
    pub const CONTENT: &str = "content";
    /// Stored record id
    pub const ID: &str = "id";
    /// Activity list
    pub const ACTIVITIES: &str = "activities";
    /// Maximum items returned
    pub const LIMIT: &str = "limit";
    /// Inclusive lower bound on `created_at`
    pub const SINCE: &str = "since";
    /// Inclusive upper bound on `created_at`
    pub const UNTIL: &str = "until";
    /// Feed switch for workout notes
    pub const INCLUDE_WORKOUTS: &str = "include_workouts";
    /// Template kind filter
    pub const TYPE: &str = "type";
    /// Workout completion filter
    pub const COMPLETED: &str = "completed";
}

/// JSON-RPC methods served by the stdio transport
pub mod methods {
    /// List operation schemas
    pub const TOOLS_LIST: &str = "tools/list";
    /// Execute an operation
    pub const TOOLS_CALL: &str = "tools/call";
    /// Offer inbound events to the stores
    pub const EVENTS_INGEST: &str = "events/ingest";
}
