// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and inbound event builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `runlog_server`

use std::sync::Once;

use runlog_server::config::ServerConfig;
use runlog_server::constants::kinds;
use runlog_server::tools::ToolEngine;
use runlog_core::models::{InboundEvent, Tag};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine with default configuration and quiet logging
pub fn create_test_engine() -> ToolEngine {
    init_test_logging();
    ToolEngine::new(&ServerConfig::default())
}

/// Generic event builder
pub fn event(id: &str, kind: u32, created_at: i64, content: &str, tags: Vec<Tag>) -> InboundEvent {
    InboundEvent {
        id: id.to_owned(),
        pubkey: format!("{id}-pubkey-0123456789"),
        created_at,
        kind,
        content: content.to_owned(),
        tags,
    }
}

/// Plain text note
pub fn text_note(id: &str, created_at: i64, content: &str) -> InboundEvent {
    event(id, kinds::TEXT_NOTE, created_at, content, vec![])
}

/// Completed workout record with distance (km) and `HH:MM:SS` duration
pub fn workout_record(id: &str, created_at: i64, distance_km: &str, duration: &str) -> InboundEvent {
    event(
        id,
        kinds::WORKOUT_RECORD,
        created_at,
        "",
        vec![
            Tag::new("d", [id]),
            Tag::new("title", ["Morning run"]),
            Tag::new("type", ["cardio"]),
            Tag::new("completed", ["true"]),
            Tag::new("distance", [distance_km, "km"]),
            Tag::new("duration", [duration]),
        ],
    )
}

/// Exercise template
pub fn exercise_template(id: &str, created_at: i64) -> InboundEvent {
    event(
        id,
        kinds::EXERCISE_TEMPLATE,
        created_at,
        "Keep your back straight",
        vec![
            Tag::new("d", [id]),
            Tag::new("title", ["Squat"]),
            Tag::new("format", ["weight", "reps"]),
            Tag::new("format_units", ["kg", "count"]),
            Tag::new("equipment", ["barbell"]),
        ],
    )
}

/// Workout template
pub fn workout_template(id: &str, created_at: i64) -> InboundEvent {
    event(
        id,
        kinds::WORKOUT_TEMPLATE,
        created_at,
        "",
        vec![
            Tag::new("d", [id]),
            Tag::new("title", ["Leg day"]),
            Tag::new("type", ["strength"]),
            Tag::new("rounds", ["3"]),
            Tag::new("exercise", ["33401:pk:squat", "3", "10", "60"]),
        ],
    )
}
