// ABOUTME: Workout record store and the record schema (distance, duration, splits, weather)
// ABOUTME: Records convert into summarizable activities using the extractor's derived-pace rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::DateTime;
use runlog_core::models::{
    Activity, ActivityDuration, AuthorRef, Distance, DistanceUnit, Elevation, ElevationUnit,
    InboundEvent, MeasurementSet, Tag,
};
use runlog_core::pagination::{QueryWindow, StorePage, Timestamped};
use serde::{Deserialize, Serialize};

use super::templates::ExerciseRef;
use super::{first_parsed, first_string, BoundedStore, IngestOutcome, MatchMode, StoredRecord, TagRule};

/// A numeric tag value with its unit, e.g. `["distance", "5.2", "km"]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagQuantity {
    /// Numeric value
    pub value: f64,
    /// Unit as written; empty when absent
    pub unit: String,
}

impl TagQuantity {
    /// Parse `[value, unit?]`; an unparsable value yields `None`
    #[must_use]
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        Some(Self {
            value: tag.first_value()?.trim().parse().ok()?,
            unit: tag.value(1).unwrap_or_default().to_owned(),
        })
    }
}

/// One split: `["split", index, elapsed, unit?]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Split number as written
    pub index: String,
    /// Elapsed time as written
    pub elapsed: String,
    /// Split distance unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Weather readings grouped from the `weather_*` tags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// `weather_temp`
    pub temperature: Option<TagQuantity>,
    /// `weather_humidity`, percent
    pub humidity: Option<f64>,
    /// `weather_condition`
    pub condition: Option<String>,
}

/// A completed or planned workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Event id
    pub id: String,
    /// Author placeholder
    pub author: AuthorRef,
    /// Creation time, unix seconds
    pub created_at: i64,
    /// Free-text notes
    pub content: String,
    /// `d` tag
    pub identifier: String,
    /// `title` tag
    pub title: String,
    /// `type` tag (strength, cardio, ...)
    pub workout_type: Option<String>,
    /// `start` tag, unix seconds
    pub start: Option<i64>,
    /// `end` tag, unix seconds
    pub end: Option<i64>,
    /// `completed` tag
    pub completed: Option<bool>,
    /// `distance` tag
    pub distance: Option<TagQuantity>,
    /// `duration` tag as written (`HH:MM:SS`)
    pub duration: Option<String>,
    /// `elevation_gain` tag
    pub elevation_gain: Option<TagQuantity>,
    /// `heart_rate_avg` tag, bpm
    pub heart_rate_avg: Option<u32>,
    /// `split` tags
    pub splits: Vec<Split>,
    /// Grouped `weather_*` tags; absent when none were present
    pub weather: Option<WeatherReading>,
    /// `exercise` tags
    pub exercises: Vec<ExerciseRef>,
    /// `template` tag
    pub template: Option<String>,
    /// `t` tags
    pub hashtags: Vec<String>,
}

impl Timestamped for WorkoutRecord {
    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn id(&self) -> &str {
        &self.id
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn weather(record: &mut WorkoutRecord) -> &mut WeatherReading {
    record.weather.get_or_insert_with(WeatherReading::default)
}

fn apply_split(record: &mut WorkoutRecord, tag: &Tag) {
    if let (Some(index), Some(elapsed)) = (tag.value(0), tag.value(1)) {
        record.splits.push(Split {
            index: index.to_owned(),
            elapsed: elapsed.to_owned(),
            unit: tag.value(2).map(str::to_owned),
        });
    }
}

const RECORD_SCHEMA: &[TagRule<WorkoutRecord>] = &[
    TagRule {
        label: "d",
        mode: MatchMode::First,
        apply: |r, tag| r.identifier = first_string(tag).unwrap_or_default(),
    },
    TagRule {
        label: "title",
        mode: MatchMode::First,
        apply: |r, tag| r.title = first_string(tag).unwrap_or_default(),
    },
    TagRule {
        label: "type",
        mode: MatchMode::First,
        apply: |r, tag| r.workout_type = first_string(tag),
    },
    TagRule {
        label: "start",
        mode: MatchMode::First,
        apply: |r, tag| r.start = first_parsed(tag),
    },
    TagRule {
        label: "end",
        mode: MatchMode::First,
        apply: |r, tag| r.end = first_parsed(tag),
    },
    TagRule {
        label: "completed",
        mode: MatchMode::First,
        apply: |r, tag| r.completed = tag.first_value().and_then(parse_flag),
    },
    TagRule {
        label: "distance",
        mode: MatchMode::First,
        apply: |r, tag| r.distance = TagQuantity::from_tag(tag),
    },
    TagRule {
        label: "duration",
        mode: MatchMode::First,
        apply: |r, tag| r.duration = first_string(tag),
    },
    TagRule {
        label: "elevation_gain",
        mode: MatchMode::First,
        apply: |r, tag| r.elevation_gain = TagQuantity::from_tag(tag),
    },
    TagRule {
        label: "heart_rate_avg",
        mode: MatchMode::First,
        apply: |r, tag| r.heart_rate_avg = first_parsed(tag),
    },
    TagRule {
        label: "split",
        mode: MatchMode::All,
        apply: apply_split,
    },
    TagRule {
        label: "weather_temp",
        mode: MatchMode::First,
        apply: |r, tag| weather(r).temperature = TagQuantity::from_tag(tag),
    },
    TagRule {
        label: "weather_humidity",
        mode: MatchMode::First,
        apply: |r, tag| weather(r).humidity = first_parsed(tag),
    },
    TagRule {
        label: "weather_condition",
        mode: MatchMode::First,
        apply: |r, tag| weather(r).condition = first_string(tag),
    },
    TagRule {
        label: "exercise",
        mode: MatchMode::All,
        apply: |r, tag| r.exercises.extend(ExerciseRef::from_tag(tag)),
    },
    TagRule {
        label: "template",
        mode: MatchMode::First,
        apply: |r, tag| r.template = first_string(tag),
    },
    TagRule {
        label: "t",
        mode: MatchMode::All,
        apply: |r, tag| r.hashtags.extend(first_string(tag)),
    },
];

impl StoredRecord for WorkoutRecord {
    fn schema() -> &'static [TagRule<Self>] {
        RECORD_SCHEMA
    }

    fn from_header(event: &InboundEvent) -> Self {
        Self {
            id: event.id.clone(),
            author: AuthorRef::placeholder(&event.pubkey),
            created_at: event.created_at,
            content: event.content.clone(),
            identifier: String::new(),
            title: String::new(),
            workout_type: None,
            start: None,
            end: None,
            completed: None,
            distance: None,
            duration: None,
            elevation_gain: None,
            heart_rate_avg: None,
            splits: Vec::new(),
            weather: None,
            exercises: Vec::new(),
            template: None,
            hashtags: Vec::new(),
        }
    }
}

impl WorkoutRecord {
    /// Convert into an activity for summarization.
    ///
    /// The timestamp is `start`, falling back to `created_at`. Duration comes
    /// from the `duration` tag, else from `end - start`. A pace is derived
    /// when distance and duration are both known.
    #[must_use]
    pub fn to_activity(&self) -> Activity {
        let timestamp = DateTime::from_timestamp(self.start.unwrap_or(self.created_at), 0);

        let distance = self.distance.as_ref().and_then(|quantity| {
            Some(Distance {
                value: quantity.value,
                unit: DistanceUnit::parse(&quantity.unit)?,
            })
        });

        let duration = self
            .duration
            .as_deref()
            .and_then(ActivityDuration::parse_clock)
            .or_else(|| {
                let (start, end) = (self.start?, self.end?);
                let seconds = u64::try_from(end.checked_sub(start)?).ok()?;
                Some(ActivityDuration::from_total_seconds(seconds))
            });

        let elevation = self.elevation_gain.as_ref().and_then(|quantity| {
            Some(Elevation {
                value: quantity.value,
                unit: ElevationUnit::parse(&quantity.unit)?,
            })
        });

        let weather = self
            .weather
            .as_ref()
            .and_then(|w| w.condition.as_deref())
            .map(|condition| vec![condition.to_lowercase()])
            .unwrap_or_default();

        let mut measurements = MeasurementSet {
            distance,
            duration,
            elevation,
            heart_rate: self.heart_rate_avg,
            weather,
            ..MeasurementSet::default()
        };
        measurements.derive_pace();

        Activity::new(timestamp, measurements)
    }
}

/// Workout record query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordQuery {
    /// Time window and limit
    pub window: QueryWindow,
    /// Keep only records whose completion flag matches; a missing flag counts as `false`
    pub completed: Option<bool>,
}

/// Bounded store of workout records
pub struct RecordStore {
    records: BoundedStore<WorkoutRecord>,
}

impl RecordStore {
    /// Create an empty store holding at most `max_size` records
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: BoundedStore::new("workout_records", max_size),
        }
    }

    /// Add a workout record
    pub fn ingest(&mut self, event: &InboundEvent) -> IngestOutcome {
        self.records.ingest(event)
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WorkoutRecord> {
        self.records.get(id)
    }

    /// Records in the window, newest arrival first, with the unfiltered store size
    #[must_use]
    pub fn query(&self, query: &RecordQuery) -> StorePage<WorkoutRecord> {
        let items = self.records.query(&query.window, |record| {
            query
                .completed
                .is_none_or(|wanted| record.completed.unwrap_or(false) == wanted)
        });
        StorePage::new(items, self.records.len())
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
