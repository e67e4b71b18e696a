//! searchd client seam
//!
//! The wire protocol lives in whichever client is plugged in here; this
//! module only defines what the facade needs from it.

pub mod escape;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod recording;

pub use escape::{escape, unescape};
pub use traits::SphinxClient;
pub use types::*;
