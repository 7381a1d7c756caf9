use crate::config::CensusOptions;
use crate::error::Result;
use crate::filesystem::{is_git_dir, relative_display, resolve_dir};
use chrono::{DateTime, Local};
use ignore::{WalkBuilder, WalkState};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Label used for the census root itself.
pub const ROOT_LABEL: &str = "根目录";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirCount {
    pub directory: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CensusReport {
    pub root: PathBuf,
    pub generated_at: DateTime<Local>,
    /// Sorted by count (descending), then directory name.
    pub entries: Vec<DirCount>,
    pub total: usize,
}

impl CensusReport {
    fn from_counts(root: PathBuf, counts: BTreeMap<String, usize>) -> Self {
        let mut entries: Vec<DirCount> = counts
            .into_iter()
            .map(|(directory, count)| DirCount { directory, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.directory.cmp(&b.directory)));
        let total = entries.iter().map(|e| e.count).sum();
        Self {
            root,
            generated_at: Local::now(),
            entries,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count Markdown files per directory below `options.root`.
///
/// Each file counts toward its immediate parent only. Directories without
/// Markdown files are left out. `.git` is pruned; hidden and ignored paths
/// are counted.
///
/// # Errors
/// Returns [`crate::EngineError::RootUnreadable`] if the root cannot be opened.
pub fn census(options: &CensusOptions) -> Result<CensusReport> {
    let root = resolve_dir(&options.root)?;
    let (tx, rx) = crossbeam_channel::bounded::<PathBuf>(1024);

    let mut builder = WalkBuilder::new(&root);
    builder
        .standard_filters(false)
        .threads(options.threads)
        .follow_links(options.follow_links)
        .filter_entry(|entry| !is_git_dir(entry.file_name()));
    let walker = builder.build_parallel();
    let suffix = options.suffix.clone();

    let counts = std::thread::scope(|scope| {
        scope.spawn(move || {
            walker.run(|| {
                let tx = tx.clone();
                let suffix = suffix.clone();
                Box::new(move |entry| {
                    match entry {
                        Ok(entry) => {
                            if entry.file_type().is_some_and(|ft| ft.is_file())
                                && entry.file_name().to_string_lossy().ends_with(&suffix)
                                && let Some(parent) = entry.path().parent()
                            {
                                let _ = tx.send(parent.to_path_buf());
                            }
                        }
                        Err(e) => log::warn!("skipping unreadable entry: {e}"),
                    }
                    WalkState::Continue
                })
            });
        });

        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for dir in rx {
            let label = relative_display(&dir, &root);
            let label = if label.is_empty() {
                ROOT_LABEL.to_string()
            } else {
                label
            };
            *counts.entry(label).or_default() += 1;
        }
        counts
    });

    log::debug!("census of {} covered {} directories", root.display(), counts.len());
    Ok(CensusReport::from_counts(root, counts))
}
