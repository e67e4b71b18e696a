//! Event publishing seams

use super::event::SearchEvent;

/// Where the facade sends its events.
///
/// Publishing is fire-and-forget and happens on the caller's thread.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, name: &str, event: &SearchEvent);
}

/// Something interested in completed searches
pub trait SearchListener: Send + Sync {
    fn on_search(&self, event: &SearchEvent);
}

impl<F> SearchListener for F
where
    F: Fn(&SearchEvent) + Send + Sync,
{
    fn on_search(&self, event: &SearchEvent) {
        self(event)
    }
}
