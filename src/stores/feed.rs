// ABOUTME: Feed store holding recent plain and workout notes
// ABOUTME: Feed entry schema (hashtags, mentions), author placeholder, and include-workouts filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use runlog_core::models::{AuthorRef, InboundEvent, Tag};
use runlog_core::pagination::{QueryWindow, StorePage, Timestamped};
use serde::{Deserialize, Serialize};

use super::{BoundedStore, IngestOutcome, MatchMode, StoredRecord, TagRule};
use crate::constants::kinds;

/// Whether a feed entry is a plain note or a workout note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    /// Plain text note
    Plain,
    /// Workout record shown in the feed
    Workout,
}

impl NoteKind {
    /// Note kind for an event kind
    #[must_use]
    pub const fn from_event_kind(kind: u32) -> Self {
        if kind == kinds::WORKOUT_RECORD {
            Self::Workout
        } else {
            Self::Plain
        }
    }
}

/// One note in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    /// Event id
    pub id: String,
    /// Author placeholder
    pub author: AuthorRef,
    /// Creation time, unix seconds
    pub created_at: i64,
    /// Note body
    pub content: String,
    /// Plain or workout note
    pub note_kind: NoteKind,
    /// `t` tags
    pub hashtags: Vec<String>,
    /// `p` tags (mentioned pubkeys)
    pub mentions: Vec<String>,
}

impl Timestamped for FeedEntry {
    fn created_at(&self) -> i64 {
        self.created_at
    }

    fn id(&self) -> &str {
        &self.id
    }
}

fn apply_hashtag(entry: &mut FeedEntry, tag: &Tag) {
    entry.hashtags.extend(super::first_string(tag));
}

fn apply_mention(entry: &mut FeedEntry, tag: &Tag) {
    entry.mentions.extend(super::first_string(tag));
}

const FEED_SCHEMA: &[TagRule<FeedEntry>] = &[
    TagRule {
        label: "t",
        mode: MatchMode::All,
        apply: apply_hashtag,
    },
    TagRule {
        label: "p",
        mode: MatchMode::All,
        apply: apply_mention,
    },
];

impl StoredRecord for FeedEntry {
    fn schema() -> &'static [TagRule<Self>] {
        FEED_SCHEMA
    }

    fn from_header(event: &InboundEvent) -> Self {
        Self {
            id: event.id.clone(),
            author: AuthorRef::placeholder(&event.pubkey),
            created_at: event.created_at,
            content: event.content.clone(),
            note_kind: NoteKind::from_event_kind(event.kind),
            hashtags: Vec::new(),
            mentions: Vec::new(),
        }
    }
}

/// Feed query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQuery {
    /// Time window and limit
    pub window: QueryWindow,
    /// Include workout notes; `false` keeps plain notes only
    pub include_workouts: bool,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            window: QueryWindow::default(),
            include_workouts: true,
        }
    }
}

/// Bounded feed of recent notes
pub struct FeedStore {
    entries: BoundedStore<FeedEntry>,
}

impl FeedStore {
    /// Create an empty feed holding at most `max_size` notes
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: BoundedStore::new("feed", max_size),
        }
    }

    /// Add a note
    pub fn ingest(&mut self, event: &InboundEvent) -> IngestOutcome {
        self.entries.ingest(event)
    }

    /// Look up a note by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FeedEntry> {
        self.entries.get(id)
    }

    /// Notes in the window, newest arrival first, with the unfiltered feed size
    #[must_use]
    pub fn query(&self, query: &FeedQuery) -> StorePage<FeedEntry> {
        let items = self.entries.query(&query.window, |entry| {
            query.include_workouts || entry.note_kind == NoteKind::Plain
        });
        StorePage::new(items, self.entries.len())
    }

    /// Number of notes held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the feed is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
