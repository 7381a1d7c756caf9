// crates/engine/src/watch.rs
use crate::config::CensusOptions;
use crate::error::Result;
use crate::filesystem::{is_git_dir, resolve_dir};
use notify::event::{AccessKind, AccessMode};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

/// Decides which filesystem events warrant a new census.
///
/// Only Markdown paths outside `.git` count, and never the files the
/// watch cycle writes itself.
#[derive(Debug, Clone)]
pub struct ChangeFilter {
    suffix: String,
    ignored: Vec<PathBuf>,
}

impl ChangeFilter {
    pub fn new(suffix: impl Into<String>, ignored: &[PathBuf]) -> Self {
        Self {
            suffix: suffix.into(),
            ignored: ignored.iter().map(|p| resolve_target(p)).collect(),
        }
    }

    pub fn is_relevant(&self, path: &Path) -> bool {
        let markdown = path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(self.suffix.as_str()));
        let in_git = path.components().any(|c| is_git_dir(c.as_os_str()));
        markdown && !in_git && !self.ignored.iter().any(|p| p == path)
    }

    pub fn matches(&self, event: &Event) -> bool {
        is_change(&event.kind) && event.paths.iter().any(|p| self.is_relevant(p))
    }
}

/// Reads do not change the census; a close after writing does.
fn is_change(kind: &EventKind) -> bool {
    match kind {
        EventKind::Access(AccessKind::Close(AccessMode::Write)) => true,
        EventKind::Access(_) => false,
        _ => true,
    }
}

/// Absolute form of a path that may not exist yet.
fn resolve_target(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Run `on_event` once per burst of relevant events until the channel closes.
fn drive<F: FnMut()>(
    rx: &Receiver<Event>,
    filter: &ChangeFilter,
    debounce: Duration,
    on_event: &mut F,
) {
    while let Ok(event) = rx.recv() {
        if !filter.matches(&event) {
            continue;
        }
        log::debug!("change detected: {:?}", event.paths);
        std::thread::sleep(debounce);
        while rx.try_recv().is_ok() {}
        on_event();
    }
}

/// Watch the census root and run the callback when Markdown files change.
///
/// The callback runs once up front. Bursts of events arriving within
/// `options.watch_interval` are coalesced into a single run. Paths in
/// `ignored` (typically the report the callback writes) never trigger a run.
/// This function blocks indefinitely.
///
/// # Errors
/// Returns an error if the root cannot be resolved or watched.
pub fn watch_loop<F>(options: &CensusOptions, ignored: &[PathBuf], mut on_event: F) -> Result<()>
where
    F: FnMut(),
{
    let root = resolve_dir(&options.root)?;
    let filter = ChangeFilter::new(options.suffix.clone(), ignored);
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => log::warn!("watch error: {e:?}"),
    })?;
    watcher.watch(&root, RecursiveMode::Recursive)?;

    log::info!("watching {}", root.display());
    on_event();

    drive(&rx, &filter, options.watch_interval, &mut on_event);
    Ok(())
}
