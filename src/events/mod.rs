//! Search events
//!
//! The facade publishes a [`SearchEvent`] under [`SEARCH_EVENT`] after every
//! successful query. Anything implementing [`EventPublisher`] can receive
//! them; [`EventDispatcher`] fans them out to named listeners.

mod dispatcher;
mod event;
mod traits;

pub use dispatcher::{EventDispatcher, LoggingListener};
pub use event::{SearchEvent, SEARCH_EVENT};
pub use traits::{EventPublisher, SearchListener};
