// ABOUTME: Activity aggregator computing totals, averages, bests, histogram, and pace trend
// ABOUTME: Pure function over a list of activities; distances and paces normalized to km
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog_core::constants::summary::{
    CONSISTENCY_CV_THRESHOLD, LONG_DISTANCE_KM, MIN_TREND_POINTS, SHORT_DISTANCE_KM,
};
use runlog_core::errors::{AppError, ErrorCode};
use runlog_core::models::{
    Activity, ActivitySummary, ActivityTypeCounts, Best, Distance, ElapsedTime, KmPace,
    PersonalBests, SummaryAverages, SummaryPeriod, SummaryTotals, TrendClassification,
};
use thiserror::Error;
use tracing::debug;

use crate::statistical_analysis::StatisticalAnalyzer;

/// Summary failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// The activity list was empty
    #[error("activity list is empty")]
    EmptyActivityList,
}

impl From<SummaryError> for AppError {
    fn from(error: SummaryError) -> Self {
        match error {
            SummaryError::EmptyActivityList => {
                Self::new(ErrorCode::EmptyActivityList, error.to_string())
            }
        }
    }
}

/// Per-activity values after unit normalization
struct NormalizedActivity {
    timestamp_ms: Option<i64>,
    distance_km: Option<f64>,
    duration_seconds: Option<u64>,
    pace_seconds_per_km: Option<f64>,
}

impl NormalizedActivity {
    fn from_activity(activity: &Activity) -> Self {
        let set = &activity.measurements;
        Self {
            timestamp_ms: activity.timestamp.map(|ts| ts.timestamp_millis()),
            distance_km: set.distance.map(|d| d.to_km()),
            duration_seconds: set.duration.as_ref().map(|d| d.total_seconds),
            pace_seconds_per_km: set
                .pace
                .as_ref()
                .map(|reading| reading.pace().seconds_per_km())
                .filter(|seconds| *seconds > 0.0),
        }
    }
}

/// Summarize a list of activities.
///
/// # Errors
///
/// Returns `SummaryError::EmptyActivityList` if `activities` is empty.
pub fn summarize(activities: &[Activity]) -> Result<ActivitySummary, SummaryError> {
    if activities.is_empty() {
        return Err(SummaryError::EmptyActivityList);
    }

    let normalized: Vec<NormalizedActivity> =
        activities.iter().map(NormalizedActivity::from_activity).collect();
    let count = normalized.len() as f64;

    let total_distance_km: f64 = normalized.iter().filter_map(|a| a.distance_km).sum();
    let total_duration_seconds = normalized
        .iter()
        .filter_map(|a| a.duration_seconds)
        .fold(0_u64, u64::saturating_add);
    let paces: Vec<f64> = normalized.iter().filter_map(|a| a.pace_seconds_per_km).collect();
    let average_pace = if paces.is_empty() {
        0.0
    } else {
        paces.iter().sum::<f64>() / paces.len() as f64
    };

    let summary = ActivitySummary {
        total_activities: activities.len(),
        period: period(activities),
        totals: SummaryTotals {
            distance: Distance::km(total_distance_km),
            duration: ElapsedTime::from_seconds(total_duration_seconds as f64),
        },
        averages: SummaryAverages {
            distance: Distance::km(total_distance_km / count),
            duration: ElapsedTime::from_seconds(total_duration_seconds as f64 / count),
            pace: KmPace::from_seconds_per_km(average_pace),
        },
        bests: personal_bests(&normalized),
        activity_types: histogram(&normalized),
        trend: trend(&normalized),
    };

    debug!(
        activities = summary.total_activities,
        paced = paces.len(),
        improving = summary.trend.improving,
        consistent = summary.trend.consistent,
        "summarized activities"
    );
    Ok(summary)
}

fn period(activities: &[Activity]) -> Option<SummaryPeriod> {
    let mut timestamps = activities.iter().filter_map(|a| a.timestamp);
    let first = timestamps.next()?;
    let (start, end) = timestamps.fold((first, first), |(start, end), ts| {
        (start.min(ts), end.max(ts))
    });
    Some(SummaryPeriod { start, end })
}

fn personal_bests(activities: &[NormalizedActivity]) -> PersonalBests {
    let mut fastest: Option<(usize, f64)> = None;
    let mut longest_distance: Option<(usize, f64)> = None;
    let mut longest_duration: Option<(usize, u64)> = None;

    for (index, activity) in activities.iter().enumerate() {
        if let Some(pace) = activity.pace_seconds_per_km {
            if fastest.is_none_or(|(_, best)| pace < best) {
                fastest = Some((index, pace));
            }
        }
        if let Some(km) = activity.distance_km {
            if longest_distance.is_none_or(|(_, best)| km > best) {
                longest_distance = Some((index, km));
            }
        }
        if let Some(seconds) = activity.duration_seconds {
            if longest_duration.is_none_or(|(_, best)| seconds > best) {
                longest_duration = Some((index, seconds));
            }
        }
    }

    PersonalBests {
        fastest_pace: fastest.map(|(activity_index, pace)| Best {
            activity_index,
            value: KmPace::from_seconds_per_km(pace),
        }),
        longest_distance: longest_distance.map(|(activity_index, km)| Best {
            activity_index,
            value: Distance::km(km),
        }),
        longest_duration: longest_duration.map(|(activity_index, seconds)| Best {
            activity_index,
            value: ElapsedTime::from_seconds(seconds as f64),
        }),
    }
}

fn histogram(activities: &[NormalizedActivity]) -> ActivityTypeCounts {
    activities
        .iter()
        .filter_map(|a| a.distance_km)
        .fold(ActivityTypeCounts::default(), |mut counts, km| {
            if km < SHORT_DISTANCE_KM {
                counts.short += 1;
            } else if km < LONG_DISTANCE_KM {
                counts.medium += 1;
            } else {
                counts.long += 1;
            }
            counts
        })
}

fn trend(activities: &[NormalizedActivity]) -> TrendClassification {
    if activities.len() < MIN_TREND_POINTS {
        return TrendClassification::default();
    }

    let points: Vec<(i64, f64)> = activities
        .iter()
        .filter_map(|a| Some((a.timestamp_ms?, a.pace_seconds_per_km?)))
        .collect();
    if points.len() < MIN_TREND_POINTS {
        return TrendClassification::default();
    }

    // Offset from the earliest timestamp so epoch milliseconds stay small
    let origin = points.iter().map(|(ts, _)| *ts).min().unwrap_or(0);
    let xy: Vec<(f64, f64)> = points
        .iter()
        .map(|(ts, pace)| ((ts - origin) as f64, *pace))
        .collect();
    let paces: Vec<f64> = xy.iter().map(|(_, pace)| *pace).collect();

    // Equal timestamps leave no slope to measure, which is not improvement
    let improving = StatisticalAnalyzer::linear_regression(&xy)
        .is_ok_and(|regression| regression.slope < 0.0);
    let consistent =
        StatisticalAnalyzer::coefficient_of_variation(&paces) < CONSISTENCY_CV_THRESHOLD;

    TrendClassification {
        improving,
        consistent,
    }
}
