// ABOUTME: Main library entry point for the runlog activity-note server
// ABOUTME: Bounded record stores, the operation dispatch facade, and the JSON-RPC stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlog Server
//!
//! Turns free-text training notes into typed measurements, summarizes lists of
//! activities, and keeps bounded, deduplicated stores of notes, templates, and
//! workout records received as inbound events.
//!
//! ## Architecture
//!
//! - **stores**: three fixed-capacity stores with declarative tag schemas
//! - **tools**: named operations, their registry, and the owning `ToolEngine`
//! - **transport**: newline-delimited JSON-RPC 2.0 over stdio
//! - **config** / **logging**: environment-driven settings and `tracing` setup
//!
//! Extraction and aggregation live in the `runlog-intelligence` crate; shared
//! models and errors live in `runlog-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use runlog_server::config::ServerConfig;
//! use runlog_server::errors::AppResult;
//! use runlog_server::tools::ToolEngine;
//! use serde_json::json;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let engine = ToolEngine::new(&config);
//!     let parsed = engine.execute("parse_note", json!({ "content": "10 km in 52:30" }), None)?;
//!     println!("{parsed}");
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Error handling
pub mod errors;

/// JSON-RPC 2.0 envelope types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// Bounded record stores
pub mod stores;

/// Operation registry and dispatch facade
pub mod tools;

/// Stdio JSON-RPC transport
pub mod transport;
