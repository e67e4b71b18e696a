//! In-memory client that records every call, for tests

use super::traits::SphinxClient;
use super::types::{
    GroupFunc, Match, MatchMode, RankingMode, ResultSet, SearchdStatus, ServerAddress, SortMode,
};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetServer(ServerAddress),
    SetMatchMode(MatchMode),
    SetLimits(u32, u32, u32, u32),
    SetFieldWeights(HashMap<String, i32>),
    SetGroupBy(String, GroupFunc, String),
    SetRankingMode(RankingMode, String),
    SetSortMode(SortMode, String),
    SetFilter(String, Vec<i64>, bool),
    ResetFilters,
    Query(String, String),
    AddQuery(String, String),
    RunQueries,
}

#[derive(Debug, Default)]
pub struct RecordingClient {
    pub calls: Vec<Call>,
    /// Statuses handed out by `query`, `Ok` once exhausted
    pub statuses: VecDeque<SearchdStatus>,
    pub last_error: String,
    /// `error` field put on failing replies
    pub reply_error: String,
    batch: Vec<(String, String)>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(status: SearchdStatus, message: &str) -> Self {
        Self {
            statuses: VecDeque::from([status]),
            last_error: message.to_string(),
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<(String, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Query(q, i) => Some((q.clone(), i.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }

    /// One match per index name, IDs counting from 1
    fn reply(index_names: &str, status: SearchdStatus) -> ResultSet {
        let matches = index_names
            .split_whitespace()
            .zip(1u64..)
            .map(|(name, id)| Match {
                id,
                weight: 1,
                attrs: HashMap::from([("index".to_string(), serde_json::json!(name))]),
            })
            .collect();
        ResultSet {
            status,
            ..ResultSet::with_matches(matches)
        }
    }
}

impl SphinxClient for RecordingClient {
    fn set_server(&mut self, address: &ServerAddress) {
        self.calls.push(Call::SetServer(address.clone()));
    }

    fn set_match_mode(&mut self, mode: MatchMode) {
        self.calls.push(Call::SetMatchMode(mode));
    }

    fn set_limits(&mut self, offset: u32, limit: u32, max: u32, cutoff: u32) {
        self.calls.push(Call::SetLimits(offset, limit, max, cutoff));
    }

    fn set_field_weights(&mut self, weights: &HashMap<String, i32>) {
        self.calls.push(Call::SetFieldWeights(weights.clone()));
    }

    fn set_group_by(&mut self, attribute: &str, func: GroupFunc, group_sort: &str) {
        self.calls.push(Call::SetGroupBy(
            attribute.to_string(),
            func,
            group_sort.to_string(),
        ));
    }

    fn set_ranking_mode(&mut self, ranker: RankingMode, rank_expr: &str) {
        self.calls
            .push(Call::SetRankingMode(ranker, rank_expr.to_string()));
    }

    fn set_sort_mode(&mut self, mode: SortMode, sort_by: &str) {
        self.calls.push(Call::SetSortMode(mode, sort_by.to_string()));
    }

    fn set_filter(&mut self, attribute: &str, values: &[i64], exclude: bool) {
        self.calls
            .push(Call::SetFilter(attribute.to_string(), values.to_vec(), exclude));
    }

    fn reset_filters(&mut self) {
        self.calls.push(Call::ResetFilters);
    }

    fn query(&mut self, query: &str, index_names: &str) -> ResultSet {
        self.calls
            .push(Call::Query(query.to_string(), index_names.to_string()));
        let status = self.statuses.pop_front().unwrap_or_default();
        let mut reply = Self::reply(index_names, status);
        if status.is_failure() {
            reply.error = self.reply_error.clone();
        }
        reply
    }

    fn add_query(&mut self, query: &str, index_names: &str) {
        self.calls
            .push(Call::AddQuery(query.to_string(), index_names.to_string()));
        self.batch.push((query.to_string(), index_names.to_string()));
    }

    fn run_queries(&mut self) -> Vec<ResultSet> {
        self.calls.push(Call::RunQueries);
        self.batch
            .drain(..)
            .map(|(query, index_names)| {
                let mut reply = Self::reply(&index_names, SearchdStatus::Ok);
                reply.words.insert(query, Default::default());
                reply
            })
            .collect()
    }

    fn last_error(&self) -> String {
        self.last_error.clone()
    }
}
