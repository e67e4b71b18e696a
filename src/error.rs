//! Error types for the search facade

use crate::client::SearchdStatus;
use thiserror::Error;

/// Errors raised by the facade and its configuration layer
#[derive(Debug, Error)]
pub enum SearchError {
    /// A required collaborator is missing or the settings are invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// searchd answered a query with an error or retry status
    #[error(
        "Searching index \"{}\" for \"{query}\" failed with {} \"{message}\".",
        .labels.join(", "),
        status_word(.status)
    )]
    SearchExecution {
        query: String,
        labels: Vec<String>,
        message: String,
        status: SearchdStatus,
    },

    /// None of the requested labels map to an index (strict policy only)
    #[error("No valid indexes among labels \"{}\"", .labels.join(", "))]
    NoValidIndexes { labels: Vec<String> },
}

impl SearchError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Whether searchd asked for the query to be retried
    pub fn is_retry(&self) -> bool {
        matches!(
            self,
            Self::SearchExecution {
                status: SearchdStatus::Retry,
                ..
            }
        )
    }
}

fn status_word(status: &SearchdStatus) -> &'static str {
    match status {
        SearchdStatus::Retry => "retry",
        _ => "error",
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SearchError>;
