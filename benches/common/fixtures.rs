// ABOUTME: Benchmark fixtures generating activity notes, activities, and inbound events
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures.
//!
//! Every generator is a pure function of its index, so two runs of the same
//! benchmark see identical input.

use chrono::{TimeZone, Utc};
use runlog_core::models::{Activity, InboundEvent, Tag};
use runlog_intelligence::extract;
use runlog_server::constants::kinds;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum ActivityBatchSize {
    /// Small dataset (10 activities) - quick benchmarks
    Small,
    /// Medium dataset (100 activities) - typical training log
    Medium,
    /// Large dataset (1000 activities) - several years of history
    Large,
}

impl ActivityBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
            Self::Large => 1000,
        }
    }
}

const WEATHER: [&str; 4] = ["sunny", "rainy", "windy", "cold"];
const MOOD: [&str; 4] = ["great", "tired", "strong", "okay"];

/// Free-text note for index `index`
#[must_use]
pub fn note_text(index: usize) -> String {
    let km = 3 + index % 18;
    let minutes = km * 5 + index % 7;
    let seconds = (index * 13) % 60;
    let mut note = format!(
        "Ran {km} km in {minutes}:{seconds:02}, felt {}, {} out. Avg {} bpm",
        MOOD[index % MOOD.len()],
        WEATHER[index % WEATHER.len()],
        140 + index % 30,
    );
    if index % 3 == 0 {
        note.push_str(&format!(", {} m of climb", 40 + index % 200));
    }
    if index % 5 == 0 {
        note.push_str(" with a 10 minute warmup");
    }
    note
}

/// Activities extracted from generated notes, one day apart
#[must_use]
pub fn generate_activities(size: ActivityBatchSize) -> Vec<Activity> {
    (0..size.count())
        .filter_map(|index| {
            let measurements = extract(&note_text(index)).ok()?;
            let timestamp = Utc
                .timestamp_opt(1_700_000_000 + i64::try_from(index).ok()? * 86_400, 0)
                .single();
            Some(Activity::new(timestamp, measurements))
        })
        .collect()
}

/// Mixed stream of notes, workout records, and templates with some duplicate ids
#[must_use]
pub fn generate_events(count: usize) -> Vec<InboundEvent> {
    (0..count)
        .map(|index| {
            // every tenth event repeats an earlier id
            let id = if index % 10 == 9 {
                format!("event-{}", index - 5)
            } else {
                format!("event-{index}")
            };
            let created_at = 1_700_000_000 + i64::try_from(index).unwrap_or(0);
            let (kind, tags) = match index % 4 {
                0 => (kinds::TEXT_NOTE, vec![Tag::new("t", ["running"])]),
                1 => (
                    kinds::WORKOUT_RECORD,
                    vec![
                        Tag::new("d", [id.as_str()]),
                        Tag::new("title", ["Run"]),
                        Tag::new("completed", ["true"]),
                        Tag::new("distance", ["8", "km"]),
                        Tag::new("duration", ["00:41:10"]),
                    ],
                ),
                2 => (
                    kinds::EXERCISE_TEMPLATE,
                    vec![Tag::new("d", [id.as_str()]), Tag::new("title", ["Lunge"])],
                ),
                _ => (
                    kinds::WORKOUT_TEMPLATE,
                    vec![Tag::new("d", [id.as_str()]), Tag::new("rounds", ["4"])],
                ),
            };
            InboundEvent {
                id,
                pubkey: "bench-author".to_owned(),
                created_at,
                kind,
                content: note_text(index),
                tags,
            }
        })
        .collect()
}
