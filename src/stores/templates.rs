// ABOUTME: Template store for exercise and workout templates
// ABOUTME: One bounded store per template kind; merged reads re-sort by creation time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog_core::models::{AuthorRef, InboundEvent, Tag};
use runlog_core::pagination::{sort_newest_first, QueryWindow, StorePage, Timestamped};
use serde::{Deserialize, Serialize};

use super::{first_parsed, first_string, BoundedStore, IngestOutcome, MatchMode, StoredRecord, TagRule};
use crate::constants::kinds;

/// Template family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Single exercise definition
    Exercise,
    /// Multi-exercise workout plan
    Workout,
}

impl TemplateKind {
    /// Template kind for an event kind
    #[must_use]
    pub const fn from_event_kind(kind: u32) -> Option<Self> {
        match kind {
            kinds::EXERCISE_TEMPLATE => Some(Self::Exercise),
            kinds::WORKOUT_TEMPLATE => Some(Self::Workout),
            _ => None,
        }
    }

    /// Parse a `type` filter value
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "exercise" => Some(Self::Exercise),
            "workout" => Some(Self::Workout),
            _ => None,
        }
    }
}

/// Reference to an exercise template with per-use parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRef {
    /// Template address (`kind:pubkey:identifier`)
    pub reference: String,
    /// Values following the reference (sets, reps, load, ...)
    pub parameters: Vec<String>,
}

impl ExerciseRef {
    /// Parse an `exercise` tag
    #[must_use]
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        let (reference, parameters) = tag.values.split_first()?;
        Some(Self {
            reference: reference.clone(),
            parameters: parameters.to_vec(),
        })
    }
}

/// Exercise or workout template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Event id
    pub id: String,
    /// Author placeholder
    pub author: AuthorRef,
    /// Creation time, unix seconds
    pub created_at: i64,
    /// Exercise or workout
    pub kind: TemplateKind,
    /// Description text
    pub content: String,
    /// `d` tag
    pub identifier: String,
    /// `title` tag
    pub title: String,
    /// `format` tag values (parameter names)
    pub format: Vec<String>,
    /// `format_units` tag values
    pub format_units: Vec<String>,
    /// `equipment` tag
    pub equipment: Option<String>,
    /// `difficulty` tag
    pub difficulty: Option<String>,
    /// `type` tag (circuit, emom, ...)
    pub workout_type: Option<String>,
    /// `rounds` tag
    pub rounds: Option<u32>,
    /// `duration` tag, seconds
    pub duration: Option<u32>,
    /// `interval` tag, seconds
    pub interval: Option<u32>,
    /// `rest_between_rounds` tag, seconds
    pub rest_between_rounds: Option<u32>,
    /// `exercise` tags
    pub exercises: Vec<ExerciseRef>,
    /// `t` tags
    pub hashtags: Vec<String>,
}

impl Timestamped for TemplateRecord {
    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn id(&self) -> &str {
        &self.id
    }
}

const TEMPLATE_SCHEMA: &[TagRule<TemplateRecord>] = &[
    TagRule {
        label: "d",
        mode: MatchMode::First,
        apply: |t, tag| t.identifier = first_string(tag).unwrap_or_default(),
    },
    TagRule {
        label: "title",
        mode: MatchMode::First,
        apply: |t, tag| t.title = first_string(tag).unwrap_or_default(),
    },
    TagRule {
        label: "format",
        mode: MatchMode::First,
        apply: |t, tag| t.format.clone_from(&tag.values),
    },
    TagRule {
        label: "format_units",
        mode: MatchMode::First,
        apply: |t, tag| t.format_units.clone_from(&tag.values),
    },
    TagRule {
        label: "equipment",
        mode: MatchMode::First,
        apply: |t, tag| t.equipment = first_string(tag),
    },
    TagRule {
        label: "difficulty",
        mode: MatchMode::First,
        apply: |t, tag| t.difficulty = first_string(tag),
    },
    TagRule {
        label: "type",
        mode: MatchMode::First,
        apply: |t, tag| t.workout_type = first_string(tag),
    },
    TagRule {
        label: "rounds",
        mode: MatchMode::First,
        apply: |t, tag| t.rounds = first_parsed(tag),
    },
    TagRule {
        label: "duration",
        mode: MatchMode::First,
        apply: |t, tag| t.duration = first_parsed(tag),
    },
    TagRule {
        label: "interval",
        mode: MatchMode::First,
        apply: |t, tag| t.interval = first_parsed(tag),
    },
    TagRule {
        label: "rest_between_rounds",
        mode: MatchMode::First,
        apply: |t, tag| t.rest_between_rounds = first_parsed(tag),
    },
    TagRule {
        label: "exercise",
        mode: MatchMode::All,
        apply: |t, tag| t.exercises.extend(ExerciseRef::from_tag(tag)),
    },
    TagRule {
        label: "t",
        mode: MatchMode::All,
        apply: |t, tag| t.hashtags.extend(first_string(tag)),
    },
];

impl StoredRecord for TemplateRecord {
    fn schema() -> &'static [TagRule<Self>] {
        TEMPLATE_SCHEMA
    }

    fn from_header(event: &InboundEvent) -> Self {
        Self {
            id: event.id.clone(),
            author: AuthorRef::placeholder(&event.pubkey),
            created_at: event.created_at,
            kind: TemplateKind::from_event_kind(event.kind).unwrap_or(TemplateKind::Exercise),
            content: event.content.clone(),
            identifier: String::new(),
            title: String::new(),
            format: Vec::new(),
            format_units: Vec::new(),
            equipment: None,
            difficulty: None,
            workout_type: None,
            rounds: None,
            duration: None,
            interval: None,
            rest_between_rounds: None,
            exercises: Vec::new(),
            hashtags: Vec::new(),
        }
    }
}

/// Template query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemplateQuery {
    /// Time window and limit
    pub window: QueryWindow,
    /// Restrict to one kind; `None` merges both
    pub kind: Option<TemplateKind>,
}

/// Per-kind store sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateTotals {
    /// Exercise templates held
    pub exercise: usize,
    /// Workout templates held
    pub workout: usize,
}

/// Exercise and workout templates, each kind bounded separately
pub struct TemplateStore {
    exercise: BoundedStore<TemplateRecord>,
    workout: BoundedStore<TemplateRecord>,
}

impl TemplateStore {
    /// Create empty stores holding at most `max_size` templates of each kind
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            exercise: BoundedStore::new("exercise_templates", max_size),
            workout: BoundedStore::new("workout_templates", max_size),
        }
    }

    /// Add a template; events of other kinds are ignored
    pub fn ingest(&mut self, event: &InboundEvent) -> IngestOutcome {
        match TemplateKind::from_event_kind(event.kind) {
            Some(TemplateKind::Exercise) => self.exercise.ingest(event),
            Some(TemplateKind::Workout) => self.workout.ingest(event),
            None => IngestOutcome::Ignored,
        }
    }

    /// Templates in the window with per-kind totals.
    ///
    /// A single kind keeps arrival order. Both kinds are merged and sorted by
    /// `created_at` descending before the limit is applied.
    #[must_use]
    pub fn query(&self, query: &TemplateQuery) -> StorePage<TemplateRecord, TemplateTotals> {
        let items = match query.kind {
            Some(TemplateKind::Exercise) => self.exercise.query(&query.window, |_| true),
            Some(TemplateKind::Workout) => self.workout.query(&query.window, |_| true),
            None => {
                let unlimited = QueryWindow {
                    limit: usize::MAX,
                    ..query.window
                };
                let mut merged = self.exercise.query(&unlimited, |_| true);
                merged.extend(self.workout.query(&unlimited, |_| true));
                sort_newest_first(&mut merged);
                merged.truncate(query.window.limit);
                merged
            }
        };
        StorePage::new(items, self.totals())
    }

    /// Per-kind store sizes
    #[must_use]
    pub fn totals(&self) -> TemplateTotals {
        TemplateTotals {
            exercise: self.exercise.len(),
            workout: self.workout.len(),
        }
    }
}
