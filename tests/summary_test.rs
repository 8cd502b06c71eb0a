// ABOUTME: Integration tests for activity summarization
// ABOUTME: Totals, histogram, trend flags, and unit normalization over extracted notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{TimeZone, Utc};
use runlog_core::errors::{AppError, ErrorCode};
use runlog_core::models::{Activity, ActivityTypeCounts};
use runlog_intelligence::{extract, summarize, SummaryError};
use serde_json::json;

fn activity_from_note(day: u32, note: &str) -> Activity {
    let timestamp = Utc.with_ymd_and_hms(2024, 5, day, 6, 30, 0).single();
    Activity::new(timestamp, extract(note).unwrap())
}

fn three_runs() -> Vec<Activity> {
    vec![
        activity_from_note(1, "5 km in 25:30"),
        activity_from_note(3, "8 km in 40:45"),
        activity_from_note(5, "10 km in 50:20"),
    ]
}

#[test]
fn test_three_runs_summary() {
    let summary = summarize(&three_runs()).unwrap();

    assert_eq!(summary.total_activities, 3);
    assert!((summary.totals.distance.value - 23.0).abs() < 1e-9);
    assert!((summary.totals.duration.seconds - 6995.0).abs() < 1e-9);
    assert_eq!(summary.totals.duration.formatted, "01:56:35");
    assert_eq!(
        summary.activity_types,
        ActivityTypeCounts {
            short: 0,
            medium: 2,
            long: 1
        }
    );
    // 306, 305.625, 302 s/km
    assert!(summary.trend.improving);
    assert!(summary.trend.consistent);

    let bests = &summary.bests;
    assert_eq!(bests.fastest_pace.as_ref().unwrap().activity_index, 2);
    assert_eq!(bests.longest_distance.as_ref().unwrap().activity_index, 2);
    assert_eq!(bests.longest_duration.as_ref().unwrap().activity_index, 2);

    let period = summary.period.unwrap();
    assert!(period.start < period.end);
}

#[test]
fn test_identical_paces_are_consistent_but_not_improving() {
    let activities = vec![
        activity_from_note(1, "5 km in 25:00"),
        activity_from_note(2, "5 km in 25:00"),
        activity_from_note(3, "5 km in 25:00"),
    ];
    let summary = summarize(&activities).unwrap();
    assert!(summary.trend.consistent);
    assert!(!summary.trend.improving);
}

#[test]
fn test_single_activity_averages_equal_values() {
    let summary = summarize(&[activity_from_note(1, "6 km in 33:00")]).unwrap();
    assert!((summary.averages.distance.value - 6.0).abs() < 1e-9);
    assert_eq!(summary.averages.duration.formatted, "00:33:00");
    assert_eq!(summary.averages.pace.formatted, "5:30/km");
    // trend needs at least three points
    assert!(!summary.trend.improving);
    assert!(!summary.trend.consistent);
}

#[test]
fn test_miles_are_normalized_to_km() {
    let summary = summarize(&[activity_from_note(1, "1 mile in 8:00")]).unwrap();
    assert!((summary.totals.distance.value - 1.609_34).abs() < 1e-9);
    assert_eq!(summary.activity_types.short, 1);
}

#[test]
fn test_empty_list_is_an_error() {
    let error = summarize(&[]).unwrap_err();
    assert_eq!(error, SummaryError::EmptyActivityList);
    assert_eq!(AppError::from(error).code, ErrorCode::EmptyActivityList);
}

#[test]
fn test_summary_wire_shape() {
    let summary = summarize(&three_runs()).unwrap();
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["totalActivities"], 3);
    assert_eq!(value["activityTypes"], json!({ "short": 0, "medium": 2, "long": 1 }));
    assert_eq!(value["trend"], json!({ "improving": true, "consistent": true }));
    assert_eq!(value["bests"]["fastestPace"]["activityIndex"], 2);
}

#[test]
fn test_activities_decode_from_parsed_note_json() {
    let activities: Vec<Activity> = serde_json::from_value(json!([
        {
            "timestamp": "2024-05-01T06:30:00Z",
            "extractedData": serde_json::to_value(extract("5 km in 25:00").unwrap()).unwrap()
        },
        { "extractedData": {} }
    ]))
    .unwrap();
    let summary = summarize(&activities).unwrap();
    assert_eq!(summary.total_activities, 2);
    assert!((summary.averages.distance.value - 2.5).abs() < 1e-9);
}
