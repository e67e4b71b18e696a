//! Sphinx-Search: index-label resolution and delegation over a searchd client
//!
//! Settings name the searchd endpoint, the indexer binary and a mapping from
//! short labels to index names. [`SphinxSearch`] resolves labels, forwards
//! every query setting to the wrapped client and publishes a
//! [`SearchEvent`] after each successful query.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod metrics;
pub mod search;

pub use client::{ResultSet, SphinxClient};
pub use config::Settings;
pub use error::{Result, SearchError};
pub use events::{EventDispatcher, EventPublisher, SearchEvent, SEARCH_EVENT};
pub use search::{IndexRegistry, SearchOptions, SphinxSearch};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
