// ABOUTME: Integration tests for the tool engine dispatch facade
// ABOUTME: Every named operation executed by name against ingested stores, plus error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{create_test_engine, exercise_template, text_note, workout_record, workout_template};
use runlog_core::errors::ErrorCode;
use runlog_server::tools::ToolEngine;
use serde_json::json;

fn engine_with_history() -> ToolEngine {
    let mut engine = create_test_engine();
    let events = [
        text_note("n1", 100, "Ran 5km in 25:30, felt great, sunny weather"),
        text_note("n2", 200, "Rest day"),
        workout_record("r1", 1_000, "5", "00:25:30"),
        workout_record("r2", 2_000, "8", "00:40:45"),
        workout_record("r3", 3_000, "10", "00:50:20"),
        exercise_template("e1", 50),
        workout_template("w1", 60),
    ];
    let counts = engine.ingest_all(&events);
    assert_eq!(counts.inserted, events.len());
    engine
}

#[test]
fn test_registered_operations() {
    let engine = create_test_engine();
    let names: Vec<String> = engine.list_schemas().into_iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "parse_feed_entry",
            "parse_note",
            "read_feed",
            "read_records",
            "read_templates",
            "summarize_activities",
            "summarize_records",
        ]
    );
}

#[test]
fn test_parse_note_operation() {
    let engine = create_test_engine();
    let result = engine
        .execute(
            "parse_note",
            json!({ "content": "Ran 5km in 25:30, felt great, sunny weather" }),
            None,
        )
        .unwrap();
    assert_eq!(result["rawContent"], "Ran 5km in 25:30, felt great, sunny weather");
    let data = &result["extractedData"];
    assert_eq!(data["duration"]["formatted"], "00:25:30");
    assert_eq!(data["calculatedPace"]["formatted"], "5:06/km");
    assert_eq!(data["weather"], json!(["sunny"]));
}

#[test]
fn test_parse_note_without_content_is_empty_input() {
    let engine = create_test_engine();
    for args in [json!({}), json!({ "content": "  " }), json!(null)] {
        let error = engine.execute("parse_note", args, None).unwrap_err();
        assert_eq!(error.code, ErrorCode::EmptyInput);
    }
}

#[test]
fn test_parse_feed_entry_reads_stored_note() {
    let engine = engine_with_history();
    let result = engine
        .execute("parse_feed_entry", json!({ "id": "n1" }), None)
        .unwrap();
    assert_eq!(result["id"], "n1");
    assert_eq!(result["extractedData"]["mood"], json!(["great"]));

    let missing = engine
        .execute("parse_feed_entry", json!({ "id": "nope" }), None)
        .unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_summarize_activities_operation() {
    let engine = create_test_engine();
    let parsed = engine
        .execute("parse_note", json!({ "content": "6 km in 33:00" }), None)
        .unwrap();
    let result = engine
        .execute(
            "summarize_activities",
            json!({ "activities": [ { "extractedData": parsed["extractedData"] } ] }),
            None,
        )
        .unwrap();
    assert_eq!(result["totalActivities"], 1);
    assert_eq!(result["averages"]["pace"]["formatted"], "5:30/km");

    let empty = engine
        .execute("summarize_activities", json!({ "activities": [] }), None)
        .unwrap_err();
    assert_eq!(empty.code, ErrorCode::EmptyActivityList);

    let missing = engine
        .execute("summarize_activities", json!({}), None)
        .unwrap_err();
    assert_eq!(missing.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_summarize_records_operation() {
    let engine = engine_with_history();
    let result = engine.execute("summarize_records", json!({}), None).unwrap();
    assert_eq!(result["totalActivities"], 3);
    let total_km = result["totals"]["distance"]["value"].as_f64().unwrap();
    assert!((total_km - 23.0).abs() < 1e-9);
    assert_eq!(result["activityTypes"], json!({ "short": 0, "medium": 2, "long": 1 }));
    assert_eq!(result["trend"]["improving"], true);
}

#[test]
fn test_summaries_survive_oversized_durations() {
    let mut engine = create_test_engine();
    engine.ingest(&workout_record("huge", 10, "5", "9999999999999999:00:00"));
    engine.ingest(&workout_record("normal", 20, "5", "00:25:00"));
    let records = engine.execute("summarize_records", json!({}), None).unwrap();
    assert_eq!(records["totalActivities"], 2);
    assert_eq!(records["totals"]["duration"]["formatted"], "00:25:00");

    let max = u64::MAX;
    let huge = json!({
        "extractedData": {
            "duration": {
                "hours": 0, "minutes": 0, "seconds": 0,
                "totalSeconds": max, "formatted": ""
            },
            "pace": { "minutes": max, "seconds": 59, "unit": "km", "formatted": "" }
        }
    });
    let result = engine
        .execute("summarize_activities", json!({ "activities": [huge.clone(), huge] }), None)
        .unwrap();
    assert_eq!(result["totalActivities"], 2);
    assert_eq!(result["bests"]["longestDuration"]["activityIndex"], 0);
}

#[test]
fn test_read_feed_operation() {
    let engine = engine_with_history();
    let result = engine
        .execute("read_feed", json!({ "limit": 2 }), None)
        .unwrap();
    assert_eq!(result["total"], 5);
    let feed = result["feed"].as_array().unwrap();
    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0]["id"], "r3");

    let plain = engine
        .execute("read_feed", json!({ "include_workouts": false }), None)
        .unwrap();
    let ids: Vec<&str> = plain["feed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["n2", "n1"]);
}

#[test]
fn test_read_templates_operation() {
    let engine = engine_with_history();
    let all = engine.execute("read_templates", json!({}), None).unwrap();
    assert_eq!(all["total"], json!({ "exercise": 1, "workout": 1 }));
    assert_eq!(all["templates"][0]["id"], "w1");

    let exercises = engine
        .execute("read_templates", json!({ "type": "exercise" }), None)
        .unwrap();
    assert_eq!(exercises["templates"].as_array().unwrap().len(), 1);

    let bad = engine
        .execute("read_templates", json!({ "type": "cardio" }), None)
        .unwrap_err();
    assert_eq!(bad.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_read_records_operation() {
    let engine = engine_with_history();
    let result = engine
        .execute(
            "read_records",
            json!({ "since": 2_000, "until": 3_000, "completed": true }),
            None,
        )
        .unwrap();
    assert_eq!(result["total"], 3);
    let ids: Vec<&str> = result["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["r3", "r2"]);
}

#[test]
fn test_unknown_operation_and_bad_arguments() {
    let engine = create_test_engine();
    let unknown = engine.execute("delete_everything", json!({}), None).unwrap_err();
    assert_eq!(unknown.code, ErrorCode::UnknownOperation);

    let bad = engine
        .execute("read_feed", json!({ "limit": "ten" }), None)
        .unwrap_err();
    assert_eq!(bad.code, ErrorCode::InvalidFormat);
}
