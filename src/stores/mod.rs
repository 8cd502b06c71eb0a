// ABOUTME: Bounded, deduplicated, insertion-ordered record stores fed by inbound events
// ABOUTME: Generic LRU-backed store, declarative tag schemas, and kind-based event routing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Record Stores
//!
//! Three independent stores hold the most recent records of each family:
//! - `FeedStore` - plain and workout notes
//! - `TemplateStore` - exercise and workout templates, one bounded store per kind
//! - `RecordStore` - completed or planned workout records
//!
//! Every store is capped. Inserting into a full store evicts the oldest arrival.
//! An id that is already present is never re-inserted or updated.

/// Note feed
pub mod feed;
/// Workout records
pub mod records;
/// Exercise and workout templates
pub mod templates;

pub use feed::{FeedEntry, FeedQuery, FeedStore, NoteKind};
pub use records::{RecordQuery, RecordStore, Split, TagQuantity, WeatherReading, WorkoutRecord};
pub use templates::{
    ExerciseRef, TemplateKind, TemplateQuery, TemplateRecord, TemplateStore, TemplateTotals,
};

use std::num::NonZeroUsize;

use lru::LruCache;
use runlog_core::models::{InboundEvent, Tag};
use runlog_core::pagination::{QueryWindow, Timestamped};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::StoreLimits;
use crate::constants::kinds;
use crate::constants::limits::DEFAULT_STORE_CAPACITY;

/// How a tag rule consumes tags carrying its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Apply to the first tag with the label only
    First,
    /// Apply to every tag with the label, in order
    All,
}

/// One entry of a record schema: which label feeds which field
pub struct TagRule<R> {
    /// Tag label this rule reads
    pub label: &'static str,
    /// First or all matching tags
    pub mode: MatchMode,
    /// Writes the tag's values into the record
    pub apply: fn(&mut R, &Tag),
}

/// Apply a schema to a record. Labels with no matching tag leave the field at its default.
pub fn apply_schema<R>(record: &mut R, tags: &[Tag], schema: &[TagRule<R>]) {
    for rule in schema {
        let mut matching = tags.iter().filter(|tag| tag.label == rule.label);
        match rule.mode {
            MatchMode::First => {
                if let Some(tag) = matching.next() {
                    (rule.apply)(record, tag);
                }
            }
            MatchMode::All => matching.for_each(|tag| (rule.apply)(record, tag)),
        }
    }
}

/// A record that can be built from an inbound event and kept in a bounded store
pub trait StoredRecord: Timestamped + Clone + 'static {
    /// Tag-to-field rules, applied in order
    fn schema() -> &'static [TagRule<Self>];

    /// Record with identity and header fields set and every tag field at its default
    fn from_header(event: &InboundEvent) -> Self;

    /// Build the full record from an event
    fn from_event(event: &InboundEvent) -> Self {
        let mut record = Self::from_header(event);
        apply_schema(&mut record, &event.tags, Self::schema());
        record
    }
}

/// Result of offering an event to the stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestOutcome {
    /// A new record was stored
    Inserted,
    /// The id was already present; nothing changed
    Skipped,
    /// The event kind is not routed to any store
    Ignored,
}

/// Fixed-capacity store keyed by record id, newest arrival first
pub struct BoundedStore<R> {
    name: &'static str,
    entries: LruCache<String, R>,
}

impl<R: StoredRecord> BoundedStore<R> {
    /// Create an empty store holding at most `max_size` records
    #[must_use]
    pub fn new(name: &'static str, max_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(DEFAULT_STORE_CAPACITY);
        Self {
            name,
            entries: LruCache::new(capacity),
        }
    }

    /// Build a record from `event` and insert it
    pub fn ingest(&mut self, event: &InboundEvent) -> IngestOutcome {
        if self.entries.contains(&event.id) {
            debug!(store = self.name, id = %event.id, "duplicate id, skipping");
            return IngestOutcome::Skipped;
        }
        self.insert(R::from_event(event))
    }

    /// Insert a built record at the head, evicting the oldest if full
    pub fn insert(&mut self, record: R) -> IngestOutcome {
        let id = record.id().to_owned();
        if self.entries.contains(&id) {
            debug!(store = self.name, id = %id, "duplicate id, skipping");
            return IngestOutcome::Skipped;
        }
        if let Some((evicted, _)) = self.entries.push(id, record) {
            trace!(store = self.name, id = %evicted, "evicted oldest record");
        }
        IngestOutcome::Inserted
    }

    /// Look up a record without changing its position
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.entries.peek(id)
    }

    /// Whether a record with this id is held
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains(id)
    }

    /// Records from newest to oldest arrival
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|(_, record)| record)
    }

    /// Records inside `window` that satisfy `predicate`, newest arrival first, at most `window.limit`
    pub fn query(&self, window: &QueryWindow, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.iter()
            .filter(|record| window.contains(record.created_at()) && predicate(record))
            .take(window.limit)
            .cloned()
            .collect()
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of records held
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

/// The three stores, routed by event kind
pub struct RecordStores {
    /// Note feed
    pub feed: FeedStore,
    /// Exercise and workout templates
    pub templates: TemplateStore,
    /// Workout records
    pub records: RecordStore,
}

impl RecordStores {
    /// Create empty stores with the given capacities
    #[must_use]
    pub fn new(limits: &StoreLimits) -> Self {
        Self {
            feed: FeedStore::new(limits.feed_max_size),
            templates: TemplateStore::new(limits.template_max_size),
            records: RecordStore::new(limits.record_max_size),
        }
    }

    /// Route an event to the store(s) for its kind.
    ///
    /// Workout records also appear in the feed as workout notes; the outcome
    /// reported is the record store's.
    pub fn ingest(&mut self, event: &InboundEvent) -> IngestOutcome {
        match event.kind {
            kinds::TEXT_NOTE => self.feed.ingest(event),
            kinds::WORKOUT_RECORD => {
                let outcome = self.records.ingest(event);
                self.feed.ingest(event);
                outcome
            }
            kinds::EXERCISE_TEMPLATE | kinds::WORKOUT_TEMPLATE => self.templates.ingest(event),
            other => {
                debug!(kind = other, id = %event.id, "event kind not stored, ignoring");
                IngestOutcome::Ignored
            }
        }
    }
}

/// First value of a tag as an owned string
pub(crate) fn first_string(tag: &Tag) -> Option<String> {
    tag.first_value().map(str::to_owned)
}

/// First value of a tag parsed as a number; unparsable values yield `None`
pub(crate) fn first_parsed<T: std::str::FromStr>(tag: &Tag) -> Option<T> {
    tag.first_value()?.trim().parse().ok()
}
