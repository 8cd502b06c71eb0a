// ABOUTME: Measurement set model produced by free-text extraction
// ABOUTME: Distance, duration, pace (explicit or derived), elevation, heart rate, weather, mood
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::{
    KM_PER_MILE, MILE_PACE_TO_KM_PACE, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Distance unit recognized in notes and tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers
    Km,
    /// Statute miles
    Mi,
}

impl DistanceUnit {
    /// Normalize a unit word (`km`, `kilometers`, `mi`, `mile`, `miles`, ...)
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "km" | "kms" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Some(Self::Km)
            }
            "mi" | "mile" | "miles" => Some(Self::Mi),
            _ => None,
        }
    }

    /// Short label used in formatted output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::Mi => "mi",
        }
    }
}

/// A distance with its unit as written
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    /// Numeric distance
    pub value: f64,
    /// Unit of `value`
    pub unit: DistanceUnit,
}

impl Distance {
    /// Create a distance in kilometers
    #[must_use]
    pub const fn km(value: f64) -> Self {
        Self {
            value,
            unit: DistanceUnit::Km,
        }
    }

    /// Distance converted to kilometers. Already-km values are returned unchanged.
    #[must_use]
    pub fn to_km(&self) -> f64 {
        match self.unit {
            DistanceUnit::Km => self.value,
            DistanceUnit::Mi => self.value * KM_PER_MILE,
        }
    }
}

/// Elevation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationUnit {
    /// Meters
    Meters,
    /// Feet
    Feet,
}

impl ElevationUnit {
    /// Normalize a unit word (`m`, `meters`, `ft`, `feet`, ...)
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Some(Self::Meters),
            "ft" | "foot" | "feet" => Some(Self::Feet),
            _ => None,
        }
    }
}

/// Elevation gain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    /// Numeric elevation
    pub value: f64,
    /// Unit of `value`
    pub unit: ElevationUnit,
}

/// Elapsed time broken into `HH:MM:SS` components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDuration {
    /// Whole hours
    pub hours: u64,
    /// Minutes past the hour
    pub minutes: u64,
    /// Seconds past the minute
    pub seconds: u64,
    /// Total elapsed seconds
    pub total_seconds: u64,
    /// `HH:MM:SS`
    pub formatted: String,
}

impl ActivityDuration {
    /// Decompose a total number of seconds
    #[must_use]
    pub fn from_total_seconds(total_seconds: u64) -> Self {
        Self {
            hours: total_seconds / SECONDS_PER_HOUR,
            minutes: (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total_seconds % SECONDS_PER_MINUTE,
            total_seconds,
            formatted: format_hms(total_seconds as f64),
        }
    }

    /// Parse `HH:MM:SS` or `MM:SS` as used in record tags
    #[must_use]
    pub fn parse_clock(value: &str) -> Option<Self> {
        let parts: Vec<u64> = value
            .trim()
            .split(':')
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        let total = match parts.as_slice() {
            [h, m, s] => h
                .checked_mul(SECONDS_PER_HOUR)?
                .checked_add(m.checked_mul(SECONDS_PER_MINUTE)?)?
                .checked_add(*s)?,
            [m, s] => m.checked_mul(SECONDS_PER_MINUTE)?.checked_add(*s)?,
            _ => return None,
        };
        Some(Self::from_total_seconds(total))
    }
}

/// Pace as whole minutes and seconds per distance unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pace {
    /// Whole minutes
    pub minutes: u64,
    /// Seconds past the minute
    pub seconds: u64,
    /// Distance unit the pace is expressed per
    pub unit: DistanceUnit,
    /// `M:SS/unit`
    pub formatted: String,
}

impl Pace {
    /// Create a pace from its components
    #[must_use]
    pub fn new(minutes: u64, seconds: u64, unit: DistanceUnit) -> Self {
        Self {
            minutes,
            seconds,
            unit,
            formatted: format!("{minutes}:{seconds:02}/{}", unit.as_str()),
        }
    }

    /// Floor a fractional seconds-per-unit value into whole minutes and seconds
    #[must_use]
    pub fn from_seconds_per_unit(seconds_per_unit: f64, unit: DistanceUnit) -> Self {
        let seconds_per_unit = seconds_per_unit.max(0.0);
        let minutes = (seconds_per_unit / 60.0).floor() as u64;
        let seconds = (seconds_per_unit % 60.0).floor() as u64;
        Self::new(minutes, seconds, unit)
    }

    /// Pace in whole seconds per this pace's unit, saturating at `u64::MAX`
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.minutes
            .saturating_mul(SECONDS_PER_MINUTE)
            .saturating_add(self.seconds)
    }

    /// Pace normalized to seconds per kilometer
    #[must_use]
    pub fn seconds_per_km(&self) -> f64 {
        let seconds = self.total_seconds() as f64;
        match self.unit {
            DistanceUnit::Km => seconds,
            DistanceUnit::Mi => seconds * MILE_PACE_TO_KM_PACE,
        }
    }
}

/// A pace that was either stated in the note or derived from distance and duration.
///
/// Holding both cases in one slot makes "explicit and derived at once" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaceReading {
    /// Stated explicitly in the text
    Explicit(Pace),
    /// Calculated from distance and duration
    Derived(Pace),
}

impl PaceReading {
    /// The underlying pace regardless of origin
    #[must_use]
    pub const fn pace(&self) -> &Pace {
        match self {
            Self::Explicit(pace) | Self::Derived(pace) => pace,
        }
    }

    /// Whether this pace was calculated rather than stated
    #[must_use]
    pub const fn is_derived(&self) -> bool {
        matches!(self, Self::Derived(_))
    }
}

/// Typed measurements extracted from one free-text note
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "MeasurementSetWire", into = "MeasurementSetWire")]
pub struct MeasurementSet {
    /// First distance mentioned
    pub distance: Option<Distance>,
    /// Sum of every duration mentioned
    pub duration: Option<ActivityDuration>,
    /// Explicit or derived pace
    pub pace: Option<PaceReading>,
    /// Elevation gain
    pub elevation: Option<Elevation>,
    /// Heart rate in beats per minute
    pub heart_rate: Option<u32>,
    /// Weather words in order of occurrence
    pub weather: Vec<String>,
    /// Mood words in order of occurrence
    pub mood: Vec<String>,
}

impl MeasurementSet {
    /// The explicitly stated pace, if any
    #[must_use]
    pub fn explicit_pace(&self) -> Option<&Pace> {
        match &self.pace {
            Some(PaceReading::Explicit(pace)) => Some(pace),
            _ => None,
        }
    }

    /// The derived pace, if any
    #[must_use]
    pub fn calculated_pace(&self) -> Option<&Pace> {
        match &self.pace {
            Some(PaceReading::Derived(pace)) => Some(pace),
            _ => None,
        }
    }

    /// Fill in a derived pace when distance and duration are known and no pace was stated.
    ///
    /// Zero distances are skipped.
    pub fn derive_pace(&mut self) {
        if self.pace.is_some() {
            return;
        }
        let (Some(distance), Some(duration)) = (&self.distance, &self.duration) else {
            return;
        };
        if distance.value <= 0.0 {
            return;
        }
        let seconds_per_unit = duration.total_seconds as f64 / distance.value;
        self.pace = Some(PaceReading::Derived(Pace::from_seconds_per_unit(
            seconds_per_unit,
            distance.unit,
        )));
    }

    /// Whether nothing was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distance.is_none()
            && self.duration.is_none()
            && self.pace.is_none()
            && self.elevation.is_none()
            && self.heart_rate.is_none()
            && self.weather.is_empty()
            && self.mood.is_empty()
    }
}

/// JSON shape of a measurement set with `pace` and `calculatedPace` as separate keys
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeasurementSetWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<Distance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<ActivityDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pace: Option<Pace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calculated_pace: Option<Pace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elevation: Option<Elevation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heart_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    weather: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    mood: Vec<String>,
}

impl From<MeasurementSetWire> for MeasurementSet {
    fn from(wire: MeasurementSetWire) -> Self {
        // Explicit pace wins if a caller sent both
        let pace = wire
            .pace
            .map(PaceReading::Explicit)
            .or_else(|| wire.calculated_pace.map(PaceReading::Derived));
        Self {
            distance: wire.distance,
            duration: wire.duration,
            pace,
            elevation: wire.elevation,
            heart_rate: wire.heart_rate,
            weather: wire.weather,
            mood: wire.mood,
        }
    }
}

impl From<MeasurementSet> for MeasurementSetWire {
    fn from(set: MeasurementSet) -> Self {
        let (pace, calculated_pace) = match set.pace {
            Some(PaceReading::Explicit(pace)) => (Some(pace), None),
            Some(PaceReading::Derived(pace)) => (None, Some(pace)),
            None => (None, None),
        };
        Self {
            distance: set.distance,
            duration: set.duration,
            pace,
            calculated_pace,
            elevation: set.elevation,
            heart_rate: set.heart_rate,
            weather: set.weather,
            mood: set.mood,
        }
    }
}

/// Format seconds as `HH:MM:SS`, flooring any fraction
#[must_use]
pub fn format_hms(total_seconds: f64) -> String {
    let total = total_seconds.max(0.0).floor() as u64;
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a seconds-per-km pace as `M:SS/km`, flooring any fraction
#[must_use]
pub fn format_pace_per_km(seconds_per_km: f64) -> String {
    Pace::from_seconds_per_unit(seconds_per_km, DistanceUnit::Km).formatted
}
