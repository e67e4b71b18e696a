//! Metrics collection module
//!
//! Tracks query counts and elapsed times per index label. Register a
//! [`SearchMetrics`] with the event dispatcher to feed it.

use crate::events::{SearchEvent, SearchListener};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Number of elapsed times kept per label
const WINDOW: usize = 100;

/// Search metrics collector
pub struct SearchMetrics {
    /// Total search count
    total_searches: AtomicU64,
    /// Searches per label
    label_searches: RwLock<HashMap<String, u64>>,
    /// Recent elapsed times per label (ms)
    label_times: RwLock<HashMap<String, Vec<u64>>>,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self {
            total_searches: AtomicU64::new(0),
            label_searches: RwLock::new(HashMap::new()),
            label_times: RwLock::new(HashMap::new()),
        }
    }

    /// Record one completed search
    pub fn record(&self, labels: &[String], elapsed_ms: u64) {
        self.total_searches.fetch_add(1, Ordering::Relaxed);

        let mut searches = self.label_searches.write().unwrap();
        let mut times = self.label_times.write().unwrap();
        for label in labels {
            *searches.entry(label.clone()).or_insert(0) += 1;

            let entry = times.entry(label.clone()).or_default();
            if entry.len() >= WINDOW {
                entry.remove(0);
            }
            entry.push(elapsed_ms);
        }
    }

    pub fn total_searches(&self) -> u64 {
        self.total_searches.load(Ordering::Relaxed)
    }

    pub fn searches_for(&self, label: &str) -> u64 {
        self.label_searches
            .read()
            .unwrap()
            .get(label)
            .copied()
            .unwrap_or(0)
    }

    /// Average elapsed time over the recent window
    pub fn avg_elapsed_ms(&self, label: &str) -> Option<u64> {
        let times = self.label_times.read().unwrap();
        times.get(label).and_then(|t| {
            if t.is_empty() {
                None
            } else {
                Some(t.iter().sum::<u64>() / t.len() as u64)
            }
        })
    }

    /// Snapshot of every label seen so far
    pub fn stats(&self) -> HashMap<String, LabelStats> {
        let searches = self.label_searches.read().unwrap();
        searches
            .iter()
            .map(|(label, count)| {
                (
                    label.clone(),
                    LabelStats {
                        searches: *count,
                        avg_elapsed_ms: self.avg_elapsed_ms(label),
                    },
                )
            })
            .collect()
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchListener for SearchMetrics {
    fn on_search(&self, event: &SearchEvent) {
        self.record(event.labels(), event.elapsed_ms());
    }
}

/// Statistics for a single label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelStats {
    pub searches: u64,
    pub avg_elapsed_ms: Option<u64>,
}
