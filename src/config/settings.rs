//! Settings structures for the search facade

use crate::client::ServerAddress;
use crate::error::SearchError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top level settings, as found in `sphinx_search.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Indexer binary, if configured
    pub indexer: Option<IndexerSettings>,
    /// Index label -> index name as defined in sphinx.conf
    pub indexes: BTreeMap<String, String>,
    pub searchd: SearchdSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (SPHINX_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SPHINX_SEARCHD_HOST") {
            self.searchd.host = val;
        }
        if let Ok(val) = std::env::var("SPHINX_SEARCHD_PORT") {
            if let Ok(port) = val.parse() {
                self.searchd.port = port;
            }
        }
        if let Ok(val) = std::env::var("SPHINX_SEARCHD_SOCKET") {
            self.searchd.socket = if val.is_empty() {
                None
            } else {
                Some(PathBuf::from(val))
            };
        }
        if let Ok(val) = std::env::var("SPHINX_INDEXER_BIN") {
            self.indexer = Some(IndexerSettings {
                bin: PathBuf::from(val),
            });
        }
    }

    /// Check the settings before a facade is built from them
    pub fn validate(&self) -> std::result::Result<(), SearchError> {
        if self.searchd.socket.is_none() && self.searchd.port == 0 {
            return Err(SearchError::configuration(
                "searchd.port must be non-zero when no socket is set",
            ));
        }
        if self.searchd.socket.is_none() && self.searchd.host.trim().is_empty() {
            return Err(SearchError::configuration(
                "searchd.host must be set when no socket is set",
            ));
        }
        for (label, name) in &self.indexes {
            if label.trim().is_empty() {
                return Err(SearchError::configuration("index labels must not be empty"));
            }
            if name.trim().is_empty() {
                return Err(SearchError::configuration(format!(
                    "index label \"{}\" maps to an empty index name",
                    label
                )));
            }
        }
        Ok(())
    }

    /// Indexer binary path, if configured
    pub fn indexer_bin(&self) -> Option<&Path> {
        self.indexer.as_ref().map(|i| i.bin.as_path())
    }
}

/// Indexer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerSettings {
    /// Path to the `indexer` binary
    pub bin: PathBuf,
}

impl Default for IndexerSettings {
    fn default() -> Self {
        Self {
            bin: PathBuf::from("/usr/bin/indexer"),
        }
    }
}

/// Where searchd listens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchdSettings {
    pub host: String,
    pub port: u16,
    /// UNIX socket; wins over host and port when set
    pub socket: Option<PathBuf>,
}

impl Default for SearchdSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9312,
            socket: None,
        }
    }
}

impl SearchdSettings {
    pub fn address(&self) -> ServerAddress {
        match &self.socket {
            Some(socket) => ServerAddress::Unix(socket.clone()),
            None => ServerAddress::Tcp {
                host: self.host.clone(),
                port: self.port,
            },
        }
    }
}

/// Search behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Escape query strings unless the caller opts out
    pub escape_queries: bool,
    /// Fail with `NoValidIndexes` instead of returning an empty result set
    pub strict_indexes: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            escape_queries: true,
            strict_indexes: false,
        }
    }
}
