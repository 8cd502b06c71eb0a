// ABOUTME: Configuration management module for server settings
// ABOUTME: Store capacities, default query limit, and deployment environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the runlog server
//!
//! - **Environment**: Server configuration from environment variables, with
//!   command-line overrides applied by the binary

/// Environment and server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig, StoreLimits};
