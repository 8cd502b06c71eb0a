// ABOUTME: Central registry for runlog operations with name lookup and execution.
// ABOUTME: Provides operation lookup, schema listing, and feature-flag-based registration.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for operations, providing:
//! - Registration and lookup by name
//! - Feature-flag-based conditional registration (`notes`, `analytics`, `stores`)
//! - Schema generation for `tools/list` responses

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppResult, ToolError};

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::schema::ToolSchema;
use super::traits::RunlogTool;

/// Central registry for operations.
///
/// Built once at startup and used immutably afterwards.
///
/// # Example
///
/// ```
/// use runlog_server::tools::registry::ToolRegistry;
///
/// let mut registry = ToolRegistry::new();
/// registry.register_builtin_tools();
/// assert!(registry.contains("parse_note") || registry.is_empty());
/// ```
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn RunlogTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn RunlogTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.tools.insert(name, tool);
        true
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn RunlogTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Schemas for every registered tool, sorted by name
    #[must_use]
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the tool is not registered or its execution fails
    pub fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext<'_>,
    ) -> AppResult<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        tool.execute(args, context)
    }

    /// Register all built-in tools based on feature flags
    pub fn register_builtin_tools(&mut self) {
        info!("Registering built-in tools...");

        // Note parsing tools
        #[cfg(feature = "tools-notes")]
        self.register_note_tools();

        // Analytics tools
        #[cfg(feature = "tools-analytics")]
        self.register_analytics_tools();

        // Store read tools
        #[cfg(feature = "tools-stores")]
        self.register_store_tools();

        info!("Registered {} built-in tools", self.len());
    }

    /// Register note parsing tools
    #[cfg(feature = "tools-notes")]
    fn register_note_tools(&mut self) {
        use super::implementations::notes::create_note_tools;

        for tool in create_note_tools() {
            self.register(Arc::from(tool));
        }

        debug!(
            "Registered note tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    /// Register analytics tools
    #[cfg(feature = "tools-analytics")]
    fn register_analytics_tools(&mut self) {
        use super::implementations::analytics::create_analytics_tools;

        for tool in create_analytics_tools() {
            self.register(Arc::from(tool));
        }

        debug!(
            "Registered analytics tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    /// Register store read tools
    #[cfg(feature = "tools-stores")]
    fn register_store_tools(&mut self) {
        use super::implementations::stores::create_store_tools;

        for tool in create_store_tools() {
            self.register(Arc::from(tool));
        }

        debug!(
            "Registered store tools (registry now has {} tools)",
            self.tools.len()
        );
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreLimits;
    use crate::errors::ErrorCode;
    use crate::stores::RecordStores;
    use crate::tools::schema::JsonSchema;
    use crate::tools::traits::ToolCapabilities;

    struct EchoTool;

    impl RunlogTool for EchoTool {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn description(&self) -> &'static str {
            "Return the arguments unchanged"
        }

        fn input_schema(&self) -> JsonSchema {
            JsonSchema::object(&[], &[])
        }

        fn capabilities(&self) -> ToolCapabilities {
            ToolCapabilities::empty()
        }

        fn execute(&self, args: Value, _context: &ToolExecutionContext<'_>) -> AppResult<ToolResult> {
            Ok(ToolResult::ok(args))
        }
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = ToolRegistry::new();
        assert!(registry.register(Arc::new(EchoTool)));
        assert!(!registry.register(Arc::new(EchoTool)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[cfg(feature = "tools-analytics")]
    fn test_builtin_analytics_schemas_are_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register_builtin_tools();
        let names: Vec<String> = registry
            .list_schemas()
            .into_iter()
            .map(|schema| schema.name)
            .filter(|name| name.starts_with("summarize"))
            .collect();
        assert_eq!(names, vec!["summarize_activities", "summarize_records"]);
    }

    #[test]
    fn test_unknown_tool_is_unknown_operation() {
        let registry = ToolRegistry::new();
        let stores = RecordStores::new(&StoreLimits::default());
        let context = ToolExecutionContext::new(&stores, 20);
        let error = registry
            .execute("fly_to_moon", Value::Null, &context)
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::UnknownOperation);
    }

    #[test]
    fn test_execute_dispatches_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        let stores = RecordStores::new(&StoreLimits::default());
        let context = ToolExecutionContext::new(&stores, 20);
        let result = registry
            .execute("echo", serde_json::json!({ "x": 1 }), &context)
            .unwrap();
        assert_eq!(result.content["x"], 1);
    }
}
