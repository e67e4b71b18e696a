//! The search facade

use super::models::SearchOptions;
use super::registry::{IndexRegistry, Resolution};
use crate::client::{
    GroupFunc, MatchMode, RankingMode, ResultSet, ServerAddress, SortMode, SphinxClient,
};
use crate::config::{SearchdSettings, Settings};
use crate::error::{Result, SearchError};
use crate::events::{EventPublisher, SearchEvent, SEARCH_EVENT};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Resolves index labels and forwards searches to a searchd client.
///
/// Filters, sorting and limits accumulate on the wrapped client, so use one
/// facade per caller.
pub struct SphinxSearch<C: SphinxClient> {
    /// Protocol client
    client: C,
    /// Where the client was pointed
    address: ServerAddress,
    /// Label -> index name
    registry: IndexRegistry,
    /// Receives a [`SearchEvent`] per successful query
    publisher: Arc<dyn EventPublisher>,
    indexer_bin: Option<PathBuf>,
    /// Fail on unresolvable labels instead of returning an empty result set
    strict_indexes: bool,
    /// Escaping used by [`search_default`](Self::search_default)
    escape_queries: bool,
}

impl<C: SphinxClient> SphinxSearch<C> {
    /// Create a facade and point the client at searchd.
    ///
    /// The socket, when set, wins over host and port. No connection is made
    /// here.
    pub fn new(
        mut client: C,
        searchd: &SearchdSettings,
        registry: IndexRegistry,
        publisher: Option<Arc<dyn EventPublisher>>,
    ) -> Result<Self> {
        let publisher = publisher
            .ok_or_else(|| SearchError::configuration("an event publisher is required"))?;

        let address = searchd.address();
        client.set_server(&address);
        debug!("searchd client pointed at {}", address);

        Ok(Self {
            client,
            address,
            registry,
            publisher,
            indexer_bin: None,
            strict_indexes: false,
            escape_queries: true,
        })
    }

    /// Create a facade from validated settings
    pub fn from_settings(
        settings: &Settings,
        client: C,
        publisher: Option<Arc<dyn EventPublisher>>,
    ) -> Result<Self> {
        settings.validate()?;
        let registry = IndexRegistry::new(settings.indexes.clone());
        let mut search = Self::new(client, &settings.searchd, registry, publisher)?;
        search.indexer_bin = settings.indexer_bin().map(Path::to_path_buf);
        search.strict_indexes = settings.search.strict_indexes;
        search.escape_queries = settings.search.escape_queries;
        info!(
            "Search facade ready with {} indexes on {}",
            search.registry.len(),
            search.address
        );
        Ok(search)
    }

    /// Fail with [`SearchError::NoValidIndexes`] when no label resolves
    pub fn with_strict_indexes(mut self, strict: bool) -> Self {
        self.strict_indexes = strict;
        self
    }

    pub fn with_escape_queries(mut self, escape: bool) -> Self {
        self.escape_queries = escape;
        self
    }

    pub fn address(&self) -> &ServerAddress {
        &self.address
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    pub fn indexer_bin(&self) -> Option<&Path> {
        self.indexer_bin.as_deref()
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Escape a string for the extended query syntax
    pub fn escape_string(&self, query: &str) -> String {
        self.client.escape_string(query)
    }

    pub fn set_match_mode(&mut self, mode: MatchMode) {
        self.client.set_match_mode(mode);
    }

    /// Set the result window; zero `max` and `cutoff` keep server defaults
    pub fn set_limits(&mut self, offset: u32, limit: u32, max: u32, cutoff: u32) {
        self.client.set_limits(offset, limit, max, cutoff);
    }

    pub fn set_field_weights(&mut self, weights: &HashMap<String, i32>) {
        self.client.set_field_weights(weights);
    }

    /// Group results by an attribute. Pass
    /// [`DEFAULT_GROUP_SORT`](crate::client::DEFAULT_GROUP_SORT) for the
    /// usual ordering.
    pub fn set_group_by(&mut self, attribute: &str, func: GroupFunc, group_sort: &str) {
        self.client.set_group_by(attribute, func, group_sort);
    }

    /// `rank_expr` is only used by [`RankingMode::Expr`]; pass `""` otherwise
    pub fn set_ranking_mode(&mut self, ranker: RankingMode, rank_expr: &str) {
        self.client.set_ranking_mode(ranker, rank_expr);
    }

    pub fn set_sort_mode(&mut self, mode: SortMode, sort_by: &str) {
        self.client.set_sort_mode(mode, sort_by);
    }

    pub fn set_filter(&mut self, attribute: &str, values: &[i64], exclude: bool) {
        self.client.set_filter(attribute, values, exclude);
    }

    pub fn reset_filters(&mut self) {
        self.client.reset_filters();
    }

    /// Resolve labels against the registry
    pub fn resolve<S: AsRef<str>>(&self, labels: &[S]) -> Resolution {
        let resolution = self.registry.resolve(labels);
        if !resolution.dropped.is_empty() {
            debug!("Dropping unknown index labels {:?}", resolution.dropped);
        }
        resolution
    }

    /// [`search`](Self::search) with default options and configured escaping
    pub fn search_default<S: AsRef<str>>(&mut self, query: &str, labels: &[S]) -> Result<ResultSet> {
        let escape = self.escape_queries;
        self.search(query, labels, &SearchOptions::default(), escape)
    }

    /// Search the indexes behind `labels`.
    ///
    /// Unknown labels are skipped. When none resolve, nothing is queried, no
    /// event is published and an empty result set comes back (or
    /// `NoValidIndexes` under the strict policy).
    pub fn search<S: AsRef<str>>(
        &mut self,
        query: &str,
        labels: &[S],
        options: &SearchOptions,
        escape_query: bool,
    ) -> Result<ResultSet> {
        let query = if escape_query {
            self.client.escape_string(query)
        } else {
            query.to_string()
        };
        let labels: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();

        let resolution = self.resolve(&labels);
        if resolution.is_empty() {
            return self.no_valid_indexes(labels);
        }

        if let Some((offset, limit)) = options.limits() {
            self.client.set_limits(offset, limit, 0, 0);
        }
        if let Some(ref weights) = options.field_weights {
            self.client.set_field_weights(weights);
        }

        let index_names = resolution.joined();
        let start = Instant::now();
        let results = self.client.query(&query, &index_names);

        if results.status.is_failure() {
            let mut message = self.client.last_error();
            if message.is_empty() {
                message = results.error.clone();
            }
            warn!(
                "Query '{}' on {} failed ({:?}): {}",
                query, index_names, results.status, message
            );
            return Err(SearchError::SearchExecution {
                query,
                labels,
                message,
                status: results.status,
            });
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Query '{}' on {} returned {} of {} matches in {}ms",
            query,
            index_names,
            results.matches.len(),
            results.total_found,
            elapsed_ms
        );

        self.publisher
            .publish(SEARCH_EVENT, &SearchEvent::new(query, labels, elapsed_ms));

        Ok(results)
    }

    fn no_valid_indexes(&self, labels: Vec<String>) -> Result<ResultSet> {
        if self.strict_indexes {
            return Err(SearchError::NoValidIndexes { labels });
        }
        debug!("No valid indexes among {:?}, skipping query", labels);
        Ok(ResultSet::empty())
    }

    /// Add a query to the batch using the current settings.
    ///
    /// Returns whether anything was added; a label set with no known label
    /// adds nothing.
    pub fn add_query<S: AsRef<str>>(&mut self, query: &str, labels: &[S]) -> bool {
        let resolution = self.resolve(labels);
        if resolution.is_empty() {
            return false;
        }
        self.client.add_query(query, &resolution.joined());
        true
    }

    /// Run the batch, one result set per added query, in order.
    ///
    /// Statuses are not turned into errors here; check
    /// [`ResultSet::is_error`] on each entry.
    pub fn run_queries(&mut self) -> Vec<ResultSet> {
        let results = self.client.run_queries();
        for (i, result) in results.iter().enumerate() {
            if result.is_error() {
                warn!(
                    "Batched query {} failed ({:?}): {}",
                    i, result.status, result.error
                );
            }
        }
        results
    }
}
