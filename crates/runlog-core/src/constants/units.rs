// ABOUTME: Unit conversion constants for distance, time, and pace
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilometers per statute mile
pub const KM_PER_MILE: f64 = 1.609_34;

/// Factor applied to a per-mile pace (in seconds) to get a per-km pace
pub const MILE_PACE_TO_KM_PACE: f64 = 0.621_371;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds per hour
pub const SECONDS_PER_HOUR: u64 = 3600;

/// Milliseconds per second
pub const MS_PER_SECOND: i64 = 1000;
