//! Protocol-level types shared by every searchd client

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Where searchd is listening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerAddress {
    /// TCP host and port
    Tcp { host: String, port: u16 },
    /// UNIX domain socket
    Unix(PathBuf),
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tcp { host, port } => write!(f, "{}:{}", host, port),
            Self::Unix(path) => write!(f, "unix://{}", path.display()),
        }
    }
}

/// Status code returned by searchd for a query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchdStatus {
    #[default]
    Ok,
    Error,
    Retry,
    Warning,
}

impl SearchdStatus {
    /// Wire code for this status
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 0,
            Self::Error => 1,
            Self::Retry => 2,
            Self::Warning => 3,
        }
    }

    /// Decode a reply status; for `SphinxClient` implementations
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::Error),
            2 => Some(Self::Retry),
            3 => Some(Self::Warning),
            _ => None,
        }
    }

    /// Error and retry are failures; a warning still carries results
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Error | Self::Retry)
    }
}

/// Matching mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    All,
    Any,
    Phrase,
    Boolean,
    Extended,
    FullScan,
    Extended2,
}

impl MatchMode {
    /// Wire code, for `SphinxClient` implementations to put on the wire
    pub fn code(self) -> u32 {
        match self {
            Self::All => 0,
            Self::Any => 1,
            Self::Phrase => 2,
            Self::Boolean => 3,
            Self::Extended => 4,
            Self::FullScan => 5,
            Self::Extended2 => 6,
        }
    }
}

/// Ranking mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    #[default]
    ProximityBm25,
    Bm25,
    None,
    WordCount,
    Proximity,
    MatchAny,
    Fieldmask,
    Sph04,
    Expr,
}

impl RankingMode {
    /// Wire code, for `SphinxClient` implementations to put on the wire
    pub fn code(self) -> u32 {
        match self {
            Self::ProximityBm25 => 0,
            Self::Bm25 => 1,
            Self::None => 2,
            Self::WordCount => 3,
            Self::Proximity => 4,
            Self::MatchAny => 5,
            Self::Fieldmask => 6,
            Self::Sph04 => 7,
            Self::Expr => 8,
        }
    }
}

/// Sorting mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    Relevance,
    AttrDesc,
    AttrAsc,
    TimeSegments,
    Extended,
    Expr,
}

impl SortMode {
    /// Wire code, for `SphinxClient` implementations to put on the wire
    pub fn code(self) -> u32 {
        match self {
            Self::Relevance => 0,
            Self::AttrDesc => 1,
            Self::AttrAsc => 2,
            Self::TimeSegments => 3,
            Self::Extended => 4,
            Self::Expr => 5,
        }
    }
}

/// Function applied to an attribute before grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupFunc {
    Day,
    Week,
    Month,
    Year,
    Attr,
    AttrPair,
}

impl GroupFunc {
    /// Wire code, for `SphinxClient` implementations to put on the wire
    pub fn code(self) -> u32 {
        match self {
            Self::Day => 0,
            Self::Week => 1,
            Self::Month => 2,
            Self::Year => 3,
            Self::Attr => 4,
            Self::AttrPair => 5,
        }
    }
}

/// Default group sort clause
pub const DEFAULT_GROUP_SORT: &str = "@group desc";

/// A single matched document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Document ID
    pub id: u64,
    /// Relevance weight
    pub weight: i64,
    /// Attribute values
    #[serde(default)]
    pub attrs: HashMap<String, serde_json::Value>,
}

/// Per-keyword statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStats {
    pub docs: u64,
    pub hits: u64,
}

/// Raw reply for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub status: SearchdStatus,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub warning: String,
    #[serde(default)]
    pub matches: Vec<Match>,
    /// Matches retrievable with the current limits
    pub total: u64,
    /// Matches found in the index
    pub total_found: u64,
    /// Server-side query time in seconds
    pub time: f64,
    #[serde(default)]
    pub words: HashMap<String, WordStats>,
}

impl ResultSet {
    /// Result set returned when nothing was queried
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_matches(matches: Vec<Match>) -> Self {
        let total = matches.len() as u64;
        Self {
            matches,
            total,
            total_found: total,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.status.is_failure()
    }

    /// Document IDs in match order
    pub fn ids(&self) -> Vec<u64> {
        self.matches.iter().map(|m| m.id).collect()
    }
}
