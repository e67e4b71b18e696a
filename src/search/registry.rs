//! Index label registry

use std::collections::BTreeMap;

/// Read-only mapping from short labels to index names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexRegistry {
    indexes: BTreeMap<String, String>,
}

impl IndexRegistry {
    pub fn new(indexes: BTreeMap<String, String>) -> Self {
        Self { indexes }
    }

    /// Index name for a label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.indexes.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.indexes.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.indexes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Resolve labels to index names, dropping labels with no entry
    pub fn resolve<S: AsRef<str>>(&self, labels: &[S]) -> Resolution {
        let mut resolution = Resolution::default();
        for label in labels {
            let label = label.as_ref();
            match self.get(label) {
                Some(name) => resolution.index_names.push(name.to_string()),
                None => resolution.dropped.push(label.to_string()),
            }
        }
        resolution
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IndexRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Outcome of resolving a label list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Index names in the order their labels were given
    pub index_names: Vec<String>,
    /// Labels with no registry entry
    pub dropped: Vec<String>,
}

impl Resolution {
    /// No label resolved; nothing may be queried
    pub fn is_empty(&self) -> bool {
        self.index_names.is_empty()
    }

    /// Index names in the form searchd expects
    pub fn joined(&self) -> String {
        self.index_names.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry() -> IndexRegistry {
        [
            ("Articles", "articles_idx"),
            ("Comments", "comments_idx"),
            ("Users", "users_idx"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_known_labels() {
        let resolution = registry().resolve(&["Comments", "Articles"]);
        assert_eq!(resolution.joined(), "comments_idx articles_idx");
        assert!(resolution.dropped.is_empty());
    }

    #[test]
    fn test_unknown_labels_are_dropped() {
        let resolution = registry().resolve(&["Nope", "Users"]);
        assert_eq!(resolution.joined(), "users_idx");
        assert_eq!(resolution.dropped, vec!["Nope"]);
    }

    #[test]
    fn test_nothing_resolved() {
        let resolution = registry().resolve(&["Nope"]);
        assert!(resolution.is_empty());
        assert_eq!(resolution.joined(), "");

        let empty: [&str; 0] = [];
        assert!(registry().resolve(&empty).is_empty());
    }

    fn known_label() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("Articles"), Just("Comments"), Just("Users")]
    }

    fn unknown_label() -> impl Strategy<Value = String> {
        "[a-z]{1,8}"
    }

    proptest! {
        #[test]
        fn known_labels_resolve_in_order(labels in proptest::collection::vec(known_label(), 1..6)) {
            let reg = registry();
            let resolution = reg.resolve(&labels);
            let expected: Vec<&str> = labels.iter().map(|l| reg.get(l).unwrap()).collect();
            prop_assert_eq!(resolution.joined(), expected.join(" "));
        }

        #[test]
        fn unknown_labels_never_resolve(labels in proptest::collection::vec(unknown_label(), 0..6)) {
            prop_assert!(registry().resolve(&labels).is_empty());
        }

        #[test]
        fn mixed_labels_keep_only_known(
            known in proptest::collection::vec(known_label(), 0..4),
            unknown in proptest::collection::vec(unknown_label(), 0..4),
        ) {
            let mut labels: Vec<String> = known.iter().map(|s| s.to_string()).collect();
            labels.extend(unknown.iter().cloned());
            let resolution = registry().resolve(&labels);
            prop_assert_eq!(resolution.index_names.len(), known.len());
            prop_assert_eq!(resolution.dropped.len(), unknown.len());
        }
    }
}
