//! Name-keyed event dispatcher

use super::event::SearchEvent;
use super::traits::{EventPublisher, SearchListener};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Dispatches events to the listeners registered under their name
#[derive(Default)]
pub struct EventDispatcher {
    listeners: HashMap<String, Vec<Arc<dyn SearchListener>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for an event name
    pub fn add_listener(&mut self, name: impl Into<String>, listener: Arc<dyn SearchListener>) {
        self.listeners.entry(name.into()).or_default().push(listener);
    }

    /// Builder form of [`add_listener`](Self::add_listener)
    pub fn with_listener(
        mut self,
        name: impl Into<String>,
        listener: Arc<dyn SearchListener>,
    ) -> Self {
        self.add_listener(name, listener);
        self
    }

    pub fn has_listeners(&self, name: &str) -> bool {
        self.listeners.get(name).is_some_and(|l| !l.is_empty())
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Vec::len)
    }
}

impl EventPublisher for EventDispatcher {
    fn publish(&self, name: &str, event: &SearchEvent) {
        let Some(listeners) = self.listeners.get(name) else {
            debug!("No listeners for {}", name);
            return;
        };
        for listener in listeners {
            listener.on_search(event);
        }
    }
}

/// Logs every search at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingListener;

impl SearchListener for LoggingListener {
    fn on_search(&self, event: &SearchEvent) {
        info!(
            query = event.query(),
            labels = ?event.labels(),
            elapsed_ms = event.elapsed_ms(),
            "Search completed"
        );
    }
}
