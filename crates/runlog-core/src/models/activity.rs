// ABOUTME: Activity input model pairing an optional timestamp with extracted measurements
// ABOUTME: Accepted by the summarizer from callers and built from stored workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::measurement::MeasurementSet;

/// One activity to be summarized
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// When the activity happened, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Measurements extracted from the activity's note
    #[serde(default, rename = "extractedData", alias = "measurementSet")]
    pub measurements: MeasurementSet,
}

impl Activity {
    /// Create an activity from a timestamp and measurements
    #[must_use]
    pub const fn new(timestamp: Option<DateTime<Utc>>, measurements: MeasurementSet) -> Self {
        Self {
            timestamp,
            measurements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_accepts_both_measurement_keys() {
        let a: Activity = serde_json::from_value(serde_json::json!({
            "timestamp": "2024-03-01T07:00:00Z",
            "extractedData": {"heartRate": 150}
        }))
        .unwrap();
        let b: Activity = serde_json::from_value(serde_json::json!({
            "measurementSet": {"heartRate": 150}
        }))
        .unwrap();

        assert_eq!(a.measurements.heart_rate, Some(150));
        assert_eq!(b.measurements.heart_rate, Some(150));
        assert!(a.timestamp.is_some());
        assert!(b.timestamp.is_none());
    }

    #[test]
    fn test_activity_without_measurements_defaults_empty() {
        let activity: Activity = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(activity.measurements.is_empty());
    }
}
