// ABOUTME: Aggregate summary model returned by activity summarization
// ABOUTME: Totals, averages, personal bests, distance histogram, and trend flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::measurement::{format_hms, format_pace_per_km, Distance};

/// Aggregate statistics over a list of activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Number of activities summarized
    pub total_activities: usize,
    /// Earliest and latest timestamps, absent when no activity had one
    pub period: Option<SummaryPeriod>,
    /// Sums across all activities
    pub totals: SummaryTotals,
    /// Per-activity averages
    pub averages: SummaryAverages,
    /// Personal bests by activity index
    pub bests: PersonalBests,
    /// Distance histogram
    pub activity_types: ActivityTypeCounts,
    /// Pace trend classification
    pub trend: TrendClassification,
}

/// Time span covered by the summarized activities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPeriod {
    /// Earliest timestamp
    pub start: DateTime<Utc>,
    /// Latest timestamp
    pub end: DateTime<Utc>,
}

/// Elapsed time in seconds with an `HH:MM:SS` rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElapsedTime {
    /// Seconds, possibly fractional for averages
    pub seconds: f64,
    /// `HH:MM:SS` with the fraction floored
    pub formatted: String,
}

impl ElapsedTime {
    /// Build from a seconds value
    #[must_use]
    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds,
            formatted: format_hms(seconds),
        }
    }
}

/// Pace normalized to seconds per kilometer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KmPace {
    /// Seconds per kilometer
    pub seconds_per_km: f64,
    /// `M:SS/km` with the fraction floored
    pub formatted: String,
}

impl KmPace {
    /// Build from a seconds-per-km value
    #[must_use]
    pub fn from_seconds_per_km(seconds_per_km: f64) -> Self {
        Self {
            seconds_per_km,
            formatted: format_pace_per_km(seconds_per_km),
        }
    }
}

/// Sums across all activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    /// Total distance in km
    pub distance: Distance,
    /// Total duration
    pub duration: ElapsedTime,
}

/// Averages across activities.
///
/// Distance and duration divide by the activity count. Pace divides by the
/// number of activities that had a usable pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryAverages {
    /// Average distance in km
    pub distance: Distance,
    /// Average duration
    pub duration: ElapsedTime,
    /// Average pace, zero when no activity had a pace
    pub pace: KmPace,
}

/// A best value tagged with the index of the activity that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Best<T> {
    /// Index into the summarized activity list
    pub activity_index: usize,
    /// The best value
    #[serde(flatten)]
    pub value: T,
}

/// Personal bests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBests {
    /// Lowest seconds-per-km pace
    pub fastest_pace: Option<Best<KmPace>>,
    /// Longest distance in km
    pub longest_distance: Option<Best<Distance>>,
    /// Longest duration
    pub longest_duration: Option<Best<ElapsedTime>>,
}

/// Distance histogram: short below 5 km, medium below 10 km, long otherwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTypeCounts {
    /// Activities under 5 km
    pub short: usize,
    /// Activities from 5 km up to 10 km
    pub medium: usize,
    /// Activities of 10 km or more
    pub long: usize,
}

/// Pace trend over time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendClassification {
    /// Pace is getting faster over time
    pub improving: bool,
    /// Pace varies less than the consistency threshold
    pub consistent: bool,
}
