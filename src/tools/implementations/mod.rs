// ABOUTME: Module containing all operation implementations organized by category.
// ABOUTME: Each submodule corresponds to a tool category with feature flag support.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `notes` - free-text extraction (`parse_note`, `parse_feed_entry`)
//! - `analytics` - summaries (`summarize_activities`, `summarize_records`)
//! - `stores` - store reads (`read_feed`, `read_templates`, `read_records`)
//!
//! Each category is conditionally compiled based on feature flags.

// Note tools: parse_note, parse_feed_entry
#[cfg(feature = "tools-notes")]
pub mod notes;

// Analytics tools: summarize_activities, summarize_records
#[cfg(feature = "tools-analytics")]
pub mod analytics;

// Store tools: read_feed, read_templates, read_records
#[cfg(feature = "tools-stores")]
pub mod stores;
