// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, vocabularies, event kinds, and store limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Fixed word lists recognized in free-text notes
pub mod vocabulary;

/// Numeric event-kind discriminators for inbound structured messages
pub mod kinds;

/// Store capacity and query limits
pub mod limits {
    use std::num::NonZeroUsize;

    /// Default maximum number of records held by each bounded store
    pub const DEFAULT_STORE_MAX_SIZE: usize = 100;
    /// `DEFAULT_STORE_MAX_SIZE` as a cache capacity
    pub const DEFAULT_STORE_CAPACITY: NonZeroUsize =
        NonZeroUsize::MIN.saturating_add(DEFAULT_STORE_MAX_SIZE - 1);
    /// Default number of items returned by a store query
    pub const DEFAULT_QUERY_LIMIT: usize = 20;
    /// Default lower bound (inclusive) of a query window, unix seconds
    pub const DEFAULT_SINCE: i64 = 0;
    /// Default upper bound (inclusive) of a query window, unix seconds
    pub const DEFAULT_UNTIL: i64 = i64::MAX;
}

/// Thresholds used by the activity summary
pub mod summary {
    /// Normalized distances below this many km are `short`
    pub const SHORT_DISTANCE_KM: f64 = 5.0;
    /// Normalized distances at or above this many km are `long`
    pub const LONG_DISTANCE_KM: f64 = 10.0;
    /// Minimum activities (and timestamped paces) before a trend is classified
    pub const MIN_TREND_POINTS: usize = 3;
    /// Coefficient of variation below which paces are `consistent`
    pub const CONSISTENCY_CV_THRESHOLD: f64 = 0.10;
}

/// Service identity used in logs
pub mod service_names {
    /// Server binary / service name
    pub const RUNLOG_SERVER: &str = "runlog-server";
}
