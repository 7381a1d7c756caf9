use crate::classify::{Topic, TopicMap};
use crate::error::{EngineError, Result};
use crate::message::VerbList;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Built-in topic table. Order matters: the first needle found in a path wins.
pub const DEFAULT_TOPICS: &[(&str, &str)] = &[
    ("Java基础", "Java基础"),
    ("Java并发", "Java并发编程"),
    ("JVM", "Java虚拟机"),
    ("MySQL", "Mysql数据库"),
    ("Redis", "Redis"),
    ("Linux", "Linux"),
    ("Maven", "Maven"),
    ("Git", "Git"),
];

pub const DEFAULT_LABEL: &str = "其他";

pub const DEFAULT_VERBS: &[&str] = &[
    "添加", "更新", "修正", "补充", "完善", "整理", "梳理", "优化", "解释", "分析",
];

pub const DEFAULT_OUTPUT_FILE: &str = "git-commit-template-result.txt";

/// The commit template document itself never gets a commit message generated for it.
pub const DEFAULT_RESERVED: &str = "docs/git-commit-template.md";

pub const MARKDOWN_SUFFIX: &str = ".md";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// Directory that relative paths are computed against.
    #[builder(default = "PathBuf::from(\".\")")]
    pub base: PathBuf,
    #[builder(default = "MARKDOWN_SUFFIX.to_string()")]
    pub suffix: String,
    #[builder(default = "vec![DEFAULT_RESERVED.to_string()]")]
    pub reserved: Vec<String>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            base: PathBuf::from("."),
            suffix: MARKDOWN_SUFFIX.to_string(),
            reserved: vec![DEFAULT_RESERVED.to_string()],
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct SessionConfig {
    #[builder(default)]
    pub scan: ScanOptions,
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct CensusOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default = "MARKDOWN_SUFFIX.to_string()")]
    pub suffix: String,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
}

impl Default for CensusOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            threads: 1,
            suffix: MARKDOWN_SUFFIX.to_string(),
            follow_links: false,
            watch_interval: Duration::from_secs(1),
        }
    }
}

/// On-disk override for the topic table and verb list.
///
/// Every key is optional; anything left out keeps the built-in value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileFile {
    pub default_label: Option<String>,
    pub topics: Option<Vec<Topic>>,
    pub verbs: Option<Vec<String>>,
}

impl ProfileFile {
    /// Load a profile from YAML, or JSON when the file ends in `.json`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&text)?)
        } else {
            Ok(serde_yaml::from_str(&text)?)
        }
    }

    /// Resolve into the two read-only tables handed to a session.
    ///
    /// # Errors
    /// Returns [`EngineError::EmptyVerbList`] if the profile sets `verbs: []`.
    pub fn resolve(self) -> Result<(TopicMap, VerbList)> {
        let defaults = TopicMap::default();
        let topics = TopicMap::new(
            self.topics.unwrap_or_else(|| defaults.topics().to_vec()),
            self.default_label
                .unwrap_or_else(|| defaults.default_label().to_string()),
        );
        let verbs = match self.verbs {
            Some(v) => VerbList::new(v)?,
            None => VerbList::default(),
        };
        Ok((topics, verbs))
    }
}
