use crate::config::{DEFAULT_LABEL, DEFAULT_TOPICS};
use serde::{Deserialize, Serialize};

/// A scope label and the path fragment that selects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub label: String,
    pub needle: String,
}

impl Topic {
    pub fn new(label: impl Into<String>, needle: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            needle: needle.into(),
        }
    }
}

/// Ordered topic table used to pick a commit scope for a document.
///
/// Topics are evaluated in declaration order and the first one whose needle
/// occurs in the path wins. Needles are matched as plain substrings, with no
/// case folding or normalisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicMap {
    topics: Vec<Topic>,
    default_label: String,
}

impl TopicMap {
    pub fn new(topics: Vec<Topic>, default_label: impl Into<String>) -> Self {
        Self {
            topics,
            default_label: default_label.into(),
        }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn default_label(&self) -> &str {
        &self.default_label
    }

    /// Returns the scope label for a relative document path.
    pub fn classify(&self, relative_path: &str) -> &str {
        self.topics
            .iter()
            .find(|t| relative_path.contains(t.needle.as_str()))
            .map_or(self.default_label.as_str(), |t| t.label.as_str())
    }
}

impl Default for TopicMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_TOPICS
                .iter()
                .map(|(label, needle)| Topic::new(*label, *needle))
                .collect(),
            DEFAULT_LABEL,
        )
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any path containing "Redis" and no earlier-declared needle is Redis.
        #[test]
        fn redis_anywhere(prefix in "[a-z/]{0,12}", suffix in "[a-z/.]{0,12}") {
            let map = TopicMap::default();
            let path = format!("{prefix}Redis{suffix}");
            prop_assert_eq!(map.classify(&path), "Redis");
        }

        /// Lowercase ASCII paths never hit the built-in table.
        #[test]
        fn lowercase_ascii_falls_back(path in "[a-z0-9/._-]{0,40}") {
            let map = TopicMap::default();
            prop_assert_eq!(map.classify(&path), map.default_label());
        }
    }
}
