// ABOUTME: Event-kind discriminators selecting the ingestion schema for inbound messages
// ABOUTME: Kinds outside this set are ignored by the record stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Plain free-text note
pub const TEXT_NOTE: u32 = 1;

/// Completed (or attempted) workout record
pub const WORKOUT_RECORD: u32 = 1301;

/// Exercise template (a single movement definition)
pub const EXERCISE_TEMPLATE: u32 = 33401;

/// Workout template (an ordered set of exercises)
pub const WORKOUT_TEMPLATE: u32 = 33402;
