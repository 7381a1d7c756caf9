use crate::config::DEFAULT_VERBS;
use crate::error::{EngineError, Result};
use serde::Serialize;
use std::fmt;

/// Ordered, non-empty list of subject verbs offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbList(Vec<String>);

impl VerbList {
    /// # Errors
    /// Returns [`EngineError::EmptyVerbList`] when `verbs` is empty.
    pub fn new(verbs: Vec<String>) -> Result<Self> {
        if verbs.is_empty() {
            return Err(EngineError::EmptyVerbList);
        }
        Ok(Self(verbs))
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Verb at a 1-based position, as shown to the user.
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.0.get(i))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for VerbList {
    fn default() -> Self {
        Self(DEFAULT_VERBS.iter().map(|v| (*v).to_string()).collect())
    }
}

/// A conventional-commit style message for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    pub scope: String,
    pub verb: String,
    pub title: String,
}

impl CommitMessage {
    pub fn new(scope: &str, verb: &str, title: &str) -> Self {
        Self {
            scope: scope.to_string(),
            verb: verb.to_string(),
            title: title.to_string(),
        }
    }

    pub fn subject(&self) -> String {
        format!("{}{}", self.verb, self.title)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "docs({}): {}{}", self.scope, self.verb, self.title)
    }
}

/// `docs(<scope>): <verb><title>`
pub fn build_message(scope: &str, verb: &str, title: &str) -> String {
    CommitMessage::new(scope, verb, title).to_string()
}
