use crate::config::ScanOptions;
use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

/// A Markdown document found by [`scan_markdown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    pub absolute: PathBuf,
    /// `/`-separated path relative to the scan base, or the absolute path
    /// when the file lives outside the base.
    pub relative: String,
    /// File name without the Markdown suffix.
    pub title: String,
}

/// Canonicalize `path`, reporting failures as an unreadable root.
pub(crate) fn resolve_dir(path: &Path) -> Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .map_err(|source| EngineError::RootUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    std::fs::read_dir(&canonical).map_err(|source| EngineError::RootUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(canonical)
}

pub(crate) fn is_git_dir(name: &std::ffi::OsStr) -> bool {
    name == ".git"
}

/// Render `path` relative to `base` with forward slashes.
pub fn relative_display(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) => rel
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}

/// Recursively collect Markdown files below `options.root`.
///
/// Hidden files and ignore files are not honoured; `.git` directories are
/// pruned and any file whose relative path contains a reserved entry is
/// skipped. Entries are yielded depth-first, sorted by file name.
///
/// # Errors
/// Returns [`EngineError::RootUnreadable`] if the root or base directory
/// cannot be opened. Unreadable entries below the root are logged and skipped.
pub fn scan_markdown(options: &ScanOptions) -> Result<Vec<MarkdownFile>> {
    let root = resolve_dir(&options.root)?;
    let base = resolve_dir(&options.base)?;
    log::debug!("scanning {} (relative to {})", root.display(), base.display());

    let mut builder = WalkBuilder::new(&root);
    builder
        .standard_filters(false)
        .follow_links(options.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| !is_git_dir(entry.file_name()));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let Some(title) = name.strip_suffix(options.suffix.as_str()) else {
            continue;
        };
        let title = title.to_string();

        let relative = relative_display(entry.path(), &base);
        if let Some(hit) = options
            .reserved
            .iter()
            .find(|r| !r.is_empty() && relative.contains(r.as_str()))
        {
            log::debug!("skipping reserved file {relative} ({hit})");
            continue;
        }

        files.push(MarkdownFile {
            absolute: entry.path().to_path_buf(),
            relative,
            title,
        });
    }

    log::debug!("found {} markdown files", files.len());
    Ok(files)
}
