// ABOUTME: Field extractor turning free-text activity notes into typed measurement sets
// ABOUTME: Regex detection of distance, duration, pace, elevation, heart rate, weather, and mood
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Field Extraction
//!
//! Each field is detected independently; a field with no match is simply left
//! out of the result. Durations are cumulative: every duration mention in the
//! note is summed, so "warmed up 10 minutes, ran for 45:30" yields 55:30.
//! Fields do not claim text from each other: the clock in "4:50/km" is both
//! the explicit pace and a duration mention.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use runlog_core::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use runlog_core::constants::vocabulary::{MOOD_WORDS, WEATHER_WORDS};
use runlog_core::errors::{AppError, ErrorCode};
use runlog_core::models::{
    ActivityDuration, Distance, DistanceUnit, Elevation, ElevationUnit, MeasurementSet, Pace,
    PaceReading,
};
use thiserror::Error;
use tracing::trace;

/// Extraction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// No text, or only whitespace, was provided
    #[error("note text is empty")]
    EmptyInput,
}

impl From<ExtractionError> for AppError {
    fn from(error: ExtractionError) -> Self {
        match error {
            ExtractionError::EmptyInput => Self::new(ErrorCode::EmptyInput, error.to_string()),
        }
    }
}

// Stored as Option so a pattern that fails to compile disables its field instead of panicking
static DISTANCE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 5km, 10.5 kilometers, 3 mi, 26.2 miles
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(km|kilometers?|mi|miles?)\b").ok()
});

static DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1:05:30, 25:30, 2 hours, 45 minutes, 30 secs
    Regex::new(concat!(
        r"(?i)\b(?:",
        r"(\d{1,2}):(\d{2}):(\d{2})\b",
        r"|(\d{1,3}):(\d{2})\b",
        r"|(\d+)\s*(?:hours?|hrs?)\b",
        r"|(\d+)\s*(?:minutes?|mins?)\b",
        r"|(\d+)\s*(?:seconds?|secs?)\b",
        r")"
    ))
    .ok()
});

static PACE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 4:50/km, 8:15 per mile, 5:10 min/km, 7:30 mi
    Regex::new(
        r"(?i)\b(\d{1,2}):(\d{2})\s*(?:min(?:utes)?\s*)?(?:/|per)?\s*(km|kilometers?|mi|miles?)\b",
    )
    .ok()
});

static ELEVATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 120m elevation, 300 ft of climb, 85 meters gain
    Regex::new(
        r"(?i)(\d+(?:\.\d+)?)\s*(m|meters?|metres?|ft|feet|foot)\s*(?:of\s+)?(?:elevation|climb|gain)\b",
    )
    .ok()
});

static HEART_RATE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 150bpm, 148 bpm, 150 heart rate
    Regex::new(r"(?i)(\d+)\s*(?:bpm|heart\s+rate)\b").ok()
});

static WEATHER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| vocabulary_pattern(WEATHER_WORDS));

static MOOD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| vocabulary_pattern(MOOD_WORDS));

fn vocabulary_pattern(words: &[&str]) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b({})\b", words.join("|"))).ok()
}

/// Extract every recognizable measurement from a free-text note.
///
/// When distance and duration are both found and no pace was stated, a pace is
/// derived from them.
///
/// # Errors
///
/// Returns `ExtractionError::EmptyInput` if `text` is empty or whitespace.
pub fn extract(text: &str) -> Result<MeasurementSet, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyInput);
    }

    let mut set = MeasurementSet {
        distance: detect_distance(text),
        duration: detect_duration(text),
        pace: detect_pace(text).map(PaceReading::Explicit),
        elevation: detect_elevation(text),
        heart_rate: detect_heart_rate(text),
        weather: detect_words(&WEATHER_PATTERN, text),
        mood: detect_words(&MOOD_PATTERN, text),
    };
    set.derive_pace();

    trace!(
        has_distance = set.distance.is_some(),
        has_duration = set.duration.is_some(),
        has_pace = set.pace.is_some(),
        "extracted measurements"
    );
    Ok(set)
}

fn detect_pace(text: &str) -> Option<Pace> {
    let caps = PACE_PATTERN.as_ref()?.captures(text)?;
    let minutes = number::<u64>(&caps, 1)?;
    let seconds = number::<u64>(&caps, 2)?;
    let unit = DistanceUnit::parse(caps.get(3)?.as_str())?;
    Some(Pace::new(minutes, seconds, unit))
}

fn detect_distance(text: &str) -> Option<Distance> {
    let caps = DISTANCE_PATTERN.as_ref()?.captures(text)?;
    Some(Distance {
        value: number::<f64>(&caps, 1)?,
        unit: DistanceUnit::parse(caps.get(2)?.as_str())?,
    })
}

fn detect_duration(text: &str) -> Option<ActivityDuration> {
    let pattern = DURATION_PATTERN.as_ref()?;
    let mut total: Option<u64> = None;

    for caps in pattern.captures_iter(text) {
        if let Some(seconds) = duration_seconds(&caps) {
            total = Some(total.unwrap_or(0).saturating_add(seconds));
        }
    }

    total.map(ActivityDuration::from_total_seconds)
}

fn duration_seconds(caps: &Captures<'_>) -> Option<u64> {
    if caps.get(1).is_some() {
        let hours = number::<u64>(caps, 1)?;
        let minutes = number::<u64>(caps, 2)?;
        let seconds = number::<u64>(caps, 3)?;
        return Some(
            hours
                .saturating_mul(SECONDS_PER_HOUR)
                .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
                .saturating_add(seconds),
        );
    }
    if caps.get(4).is_some() {
        let minutes = number::<u64>(caps, 4)?;
        let seconds = number::<u64>(caps, 5)?;
        return Some(minutes.saturating_mul(SECONDS_PER_MINUTE).saturating_add(seconds));
    }
    if let Some(hours) = number::<u64>(caps, 6) {
        return Some(hours.saturating_mul(SECONDS_PER_HOUR));
    }
    if let Some(minutes) = number::<u64>(caps, 7) {
        return Some(minutes.saturating_mul(SECONDS_PER_MINUTE));
    }
    number::<u64>(caps, 8)
}

fn detect_elevation(text: &str) -> Option<Elevation> {
    let caps = ELEVATION_PATTERN.as_ref()?.captures(text)?;
    Some(Elevation {
        value: number::<f64>(&caps, 1)?,
        unit: ElevationUnit::parse(caps.get(2)?.as_str())?,
    })
}

fn detect_heart_rate(text: &str) -> Option<u32> {
    let caps = HEART_RATE_PATTERN.as_ref()?.captures(text)?;
    number::<u32>(&caps, 1)
}

fn detect_words(pattern: &LazyLock<Option<Regex>>, text: &str) -> Vec<String> {
    pattern.as_ref().map_or_else(Vec::new, |regex| {
        regex
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect()
    })
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}
