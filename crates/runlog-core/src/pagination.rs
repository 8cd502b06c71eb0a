// ABOUTME: Time-window query filters and result pages for bounded store reads
// ABOUTME: Inclusive since/until bounds on creation time, limit truncation, newest-first ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::limits::{DEFAULT_QUERY_LIMIT, DEFAULT_SINCE, DEFAULT_UNTIL};

/// A record that can be placed on a creation-time ordered page
pub trait Timestamped {
    /// Creation time in unix seconds
    fn created_at(&self) -> i64;
    /// Record identity, used as a tie-breaker
    fn id(&self) -> &str;
}

/// Inclusive creation-time window plus a result limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryWindow {
    /// Lower bound (inclusive), unix seconds
    pub since: i64,
    /// Upper bound (inclusive), unix seconds
    pub until: i64,
    /// Maximum number of items returned
    pub limit: usize,
}

impl Default for QueryWindow {
    fn default() -> Self {
        Self {
            since: DEFAULT_SINCE,
            until: DEFAULT_UNTIL,
            limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

impl QueryWindow {
    /// Window covering all time with the given limit
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Whether `created_at` falls inside the window. Both ends are inclusive.
    #[must_use]
    pub const fn contains(&self, created_at: i64) -> bool {
        created_at >= self.since && created_at <= self.until
    }
}

/// Sort records newest first: `created_at` DESC, then id DESC
pub fn sort_newest_first<T: Timestamped>(items: &mut [T]) {
    items.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(a.id()))
    });
}

/// One page of query results plus the store's unfiltered total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePage<T, C = usize> {
    /// Items after filtering, sorting, and limit truncation
    pub items: Vec<T>,
    /// Unfiltered store size, or a per-subkind breakdown
    pub total: C,
}

impl<T, C> StorePage<T, C> {
    /// Create a page
    #[must_use]
    pub const fn new(items: Vec<T>, total: C) -> Self {
        Self { items, total }
    }

    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
