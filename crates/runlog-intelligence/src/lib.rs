// ABOUTME: Activity intelligence crate: note extraction, summaries, and trend statistics
// ABOUTME: Pure computation with no I/O, shared by the tool engine and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Runlog Intelligence
//!
//! - **extractor**: free text to `MeasurementSet`
//! - **summary**: list of `Activity` to `ActivitySummary`
//! - **`statistical_analysis`**: regression and variation helpers used for trends

/// Free-text field extraction
pub mod extractor;

/// Activity aggregation
pub mod summary;

/// Regression and dispersion statistics
pub mod statistical_analysis;

pub use extractor::{extract, ExtractionError};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use summary::{summarize, SummaryError};
