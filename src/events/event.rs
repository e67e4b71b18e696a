//! The record published after each completed query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name under which search events are published
pub const SEARCH_EVENT: &str = "sphinx.event.search";

/// A completed query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEvent {
    /// Query string as sent to searchd (escaped when escaping was on)
    query: String,
    /// Index labels the caller asked for
    labels: Vec<String>,
    /// Wall-clock time spent in the query, in milliseconds
    elapsed_ms: u64,
    occurred_at: DateTime<Utc>,
}

impl SearchEvent {
    pub fn new(query: impl Into<String>, labels: Vec<String>, elapsed_ms: u64) -> Self {
        Self {
            query: query.into(),
            labels,
            elapsed_ms,
            occurred_at: Utc::now(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
