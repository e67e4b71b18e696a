//! Per-call search options

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Options applied to the client just before a query runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Number of results to skip; only applied together with `result_limit`
    pub result_offset: Option<u32>,
    /// Number of results to return; only applied together with `result_offset`
    pub result_limit: Option<u32>,
    /// Field name -> weight
    pub field_weights: Option<HashMap<String, i32>>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set offset and limit
    pub fn with_limits(mut self, offset: u32, limit: u32) -> Self {
        self.result_offset = Some(offset);
        self.result_limit = Some(limit);
        self
    }

    /// Set one field weight
    pub fn with_field_weight(mut self, field: impl Into<String>, weight: i32) -> Self {
        self.field_weights
            .get_or_insert_with(HashMap::new)
            .insert(field.into(), weight);
        self
    }

    /// Offset and limit, when both are present
    pub fn limits(&self) -> Option<(u32, u32)> {
        self.result_offset.zip(self.result_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_need_both_values() {
        assert_eq!(SearchOptions::new().with_limits(20, 10).limits(), Some((20, 10)));

        let offset_only = SearchOptions {
            result_offset: Some(20),
            ..Default::default()
        };
        assert_eq!(offset_only.limits(), None);
    }

    #[test]
    fn test_deserialize_option_keys() {
        let options: SearchOptions = serde_json::from_str(
            r#"{"result_offset": 0, "result_limit": 25, "field_weights": {"title": 10, "body": 1}}"#,
        )
        .unwrap();

        assert_eq!(options.limits(), Some((0, 25)));
        assert_eq!(options.field_weights.unwrap()["title"], 10);
    }

    #[test]
    fn test_field_weight_builder() {
        let options = SearchOptions::new()
            .with_field_weight("title", 10)
            .with_field_weight("body", 1);
        let weights = options.field_weights.unwrap();
        assert_eq!(weights.len(), 2);
        assert_eq!(weights["body"], 1);
    }
}
