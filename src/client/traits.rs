//! The capability set a searchd client must provide

use super::escape;
use super::types::{GroupFunc, MatchMode, RankingMode, ResultSet, ServerAddress, SortMode};
use std::collections::HashMap;

/// A searchd protocol client.
///
/// Settings (limits, filters, sorting, grouping) accumulate on the client
/// and apply to every subsequent `query` or `add_query`, so one client must
/// not be shared between concurrent callers. Connecting is the client's own
/// business; `set_server` only records where to connect.
pub trait SphinxClient {
    /// Escape a string for the extended query syntax
    fn escape_string(&self, query: &str) -> String {
        escape::escape(query).into_owned()
    }

    fn set_server(&mut self, address: &ServerAddress);

    fn set_match_mode(&mut self, mode: MatchMode);

    /// `max` and `cutoff` of zero leave the server defaults in place
    fn set_limits(&mut self, offset: u32, limit: u32, max: u32, cutoff: u32);

    fn set_field_weights(&mut self, weights: &HashMap<String, i32>);

    fn set_group_by(&mut self, attribute: &str, func: GroupFunc, group_sort: &str);

    fn set_ranking_mode(&mut self, ranker: RankingMode, rank_expr: &str);

    fn set_sort_mode(&mut self, mode: SortMode, sort_by: &str);

    fn set_filter(&mut self, attribute: &str, values: &[i64], exclude: bool);

    fn reset_filters(&mut self);

    /// Run a single query against a space separated list of index names.
    ///
    /// Transport and connection failures are reported in-band: return a
    /// result set with `SearchdStatus::Error` and make `last_error` describe
    /// the failure.
    fn query(&mut self, query: &str, index_names: &str) -> ResultSet;

    /// Append a query to the pending batch
    fn add_query(&mut self, query: &str, index_names: &str);

    /// Run the pending batch, one result set per added query, in order.
    /// Failures are reported per entry the same way as for `query`.
    fn run_queries(&mut self) -> Vec<ResultSet>;

    /// Message describing the most recent failure
    fn last_error(&self) -> String;
}
