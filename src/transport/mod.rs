// ABOUTME: Transport layer carrying JSON-RPC between a client and the tool engine
// ABOUTME: Request handler plus the newline-delimited stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC method routing
pub mod handler;
/// Stdin/stdout transport
pub mod stdio;

pub use handler::RequestHandler;
pub use stdio::StdioTransport;
