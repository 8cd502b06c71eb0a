// ABOUTME: Fixed vocabularies for weather conditions and mood words in activity notes
// ABOUTME: Matching is case-insensitive on whole words; results are lowercased
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Weather condition words
pub const WEATHER_WORDS: &[&str] = &[
    "sunny", "cloudy", "rainy", "snowy", "windy", "hot", "cold", "warm", "cool", "humid",
];

/// Mood words
pub const MOOD_WORDS: &[&str] = &[
    "great",
    "good",
    "okay",
    "ok",
    "bad",
    "terrible",
    "amazing",
    "excellent",
    "difficult",
    "hard",
    "easy",
    "challenging",
    "tough",
    "struggled",
];
