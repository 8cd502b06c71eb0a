// ABOUTME: Core data models shared by extraction, aggregation, and the record stores
// ABOUTME: Re-exports measurement, activity, summary, and inbound event types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `MeasurementSet` - typed fields recovered from one free-text note
//! - `Activity` - a measurement set plus an optional timestamp
//! - `ActivitySummary` - aggregate statistics over many activities
//! - `InboundEvent` - a relay event as it arrives for ingestion

mod activity;
mod event;
mod measurement;
mod summary;

pub use activity::Activity;
pub use event::{AuthorRef, InboundEvent, Tag};
pub use measurement::{
    format_hms, format_pace_per_km, ActivityDuration, Distance, DistanceUnit, Elevation,
    ElevationUnit, MeasurementSet, Pace, PaceReading,
};
pub use summary::{
    ActivitySummary, ActivityTypeCounts, Best, ElapsedTime, KmPace, PersonalBests, SummaryAverages,
    SummaryPeriod, SummaryTotals, TrendClassification,
};
