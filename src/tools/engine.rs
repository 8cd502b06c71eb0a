// ABOUTME: Dispatch facade owning the record stores and routing named operations to tools
// ABOUTME: Handles ingestion, tool execution logging, and schema listing for the transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified tool execution engine
//!
//! The engine is the single owner of the stores. Ingestion takes `&mut self`;
//! operations take `&self`, so a failing operation cannot leave a store half
//! updated.

use runlog_core::models::InboundEvent;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::stores::{IngestOutcome, RecordStores};

use super::context::ToolExecutionContext;
use super::registry::ToolRegistry;
use super::schema::ToolSchema;

/// Per-outcome counts for a batch of ingested events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestCounts {
    /// New records stored
    pub inserted: usize,
    /// Duplicate ids skipped
    pub skipped: usize,
    /// Events of unrouted kinds
    pub ignored: usize,
}

impl IngestCounts {
    /// Count one outcome
    pub fn record(&mut self, outcome: IngestOutcome) {
        match outcome {
            IngestOutcome::Inserted => self.inserted += 1,
            IngestOutcome::Skipped => self.skipped += 1,
            IngestOutcome::Ignored => self.ignored += 1,
        }
    }
}

/// Owns the stores and the tool registry
pub struct ToolEngine {
    registry: ToolRegistry,
    stores: RecordStores,
    default_limit: usize,
}

impl ToolEngine {
    /// Create an engine with empty stores and every built-in tool registered
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        let mut registry = ToolRegistry::new();
        registry.register_builtin_tools();
        Self::with_registry(config, registry)
    }

    /// Create an engine around a caller-built registry
    #[must_use]
    pub fn with_registry(config: &ServerConfig, registry: ToolRegistry) -> Self {
        info!(
            tools = registry.len(),
            feed_max_size = config.stores.feed_max_size,
            template_max_size = config.stores.template_max_size,
            record_max_size = config.stores.record_max_size,
            "tool engine ready"
        );
        Self {
            registry,
            stores: RecordStores::new(&config.stores),
            default_limit: config.default_query_limit,
        }
    }

    /// Route one inbound event to its store(s)
    pub fn ingest(&mut self, event: &InboundEvent) -> IngestOutcome {
        self.stores.ingest(event)
    }

    /// Ingest events in order, counting outcomes
    pub fn ingest_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InboundEvent>) -> IngestCounts {
        let mut counts = IngestCounts::default();
        for event in events {
            counts.record(self.ingest(event));
        }
        debug!(
            inserted = counts.inserted,
            skipped = counts.skipped,
            ignored = counts.ignored,
            "ingested event batch"
        );
        counts
    }

    /// Execute the named operation
    ///
    /// # Errors
    ///
    /// Returns `AppError` for unknown operations, invalid parameters, missing
    /// records, or extraction and aggregation failures
    pub fn execute(&self, name: &str, args: Value, request_id: Option<&Value>) -> AppResult<Value> {
        let context = ToolExecutionContext::new(&self.stores, self.default_limit)
            .with_request_id(request_id);
        debug!(tool = name, request_id = %context.request_id_str(), "executing tool");

        match self.registry.execute(name, args, &context) {
            Ok(result) => Ok(result.into_content()),
            Err(error) => {
                if error.code.is_client_error() {
                    warn!(
                        tool = name,
                        request_id = %context.request_id_str(),
                        code = ?error.code,
                        "tool rejected request: {}",
                        error.message
                    );
                } else {
                    error!(
                        tool = name,
                        request_id = %context.request_id_str(),
                        code = ?error.code,
                        "tool failed: {}",
                        error.message
                    );
                }
                Err(error)
            }
        }
    }

    /// Schemas for `tools/list`
    #[must_use]
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.registry.list_schemas()
    }

    /// Read-only access to the stores
    #[must_use]
    pub const fn stores(&self) -> &RecordStores {
        &self.stores
    }
}

#[cfg(test)]
mod tests {
    use runlog_core::models::Tag;
    use serde_json::json;

    use super::*;
    use crate::constants::kinds;

    fn note(id: &str, kind: u32) -> InboundEvent {
        InboundEvent {
            id: id.to_owned(),
            pubkey: "pk".to_owned(),
            created_at: 1,
            kind,
            content: "5 km".to_owned(),
            tags: vec![Tag::new("t", ["run"])],
        }
    }

    #[test]
    fn test_ingest_counts() {
        let mut engine = ToolEngine::new(&ServerConfig::default());
        let events = [
            note("a", kinds::TEXT_NOTE),
            note("a", kinds::TEXT_NOTE),
            note("b", 7),
        ];
        let counts = engine.ingest_all(&events);
        assert_eq!(
            counts,
            IngestCounts {
                inserted: 1,
                skipped: 1,
                ignored: 1
            }
        );
        assert_eq!(engine.stores().feed.len(), 1);
    }

    #[test]
    fn test_failed_execution_leaves_stores_untouched() {
        let mut engine = ToolEngine::new(&ServerConfig::default());
        engine.ingest(&note("a", kinds::TEXT_NOTE));
        assert!(engine.execute("parse_note", json!({ "content": "  " }), None).is_err());
        assert!(engine.execute("nonexistent", Value::Null, None).is_err());
        assert_eq!(engine.stores().feed.len(), 1);
    }
}
