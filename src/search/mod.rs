//! Search facade module
//!
//! Maps index labels to index names and forwards queries, filters and
//! batches to a [`SphinxClient`](crate::client::SphinxClient).

mod executor;
mod models;
mod registry;

pub use executor::SphinxSearch;
pub use models::*;
pub use registry::{IndexRegistry, Resolution};
