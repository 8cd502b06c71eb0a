// ABOUTME: Pluggable operation architecture behind the dispatch facade
// ABOUTME: Tool trait, registry, execution context, typed params, and the owning engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Each named operation is a `RunlogTool` registered in the `ToolRegistry`.
//! The `ToolEngine` owns the registry and the record stores and is the only
//! entry point used by the transport.

/// Execution context passed to tools
pub mod context;
/// Dispatch facade
pub mod engine;
/// Operation implementations by category
pub mod implementations;
/// Typed operation parameters
pub mod params;
/// Tool registry
pub mod registry;
/// Tool results
pub mod result;
/// Input schemas for `tools/list`
pub mod schema;
/// Tool trait and capabilities
pub mod traits;

pub use context::ToolExecutionContext;
pub use engine::{IngestCounts, ToolEngine};
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{RunlogTool, ToolCapabilities};
