use console::style;
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ButlerError, Result, RewriteError};
use crate::template::Renderer;

/// Only files ending with one of these (case-insensitive) are rendered.
pub const ALLOWED_EXTENSIONS: [&str; 9] = [
    ".md", ".txt", ".html", ".htm", ".rtf", ".json", ".yml", ".csproj", ".sln",
];

/// Directories that are never descended into.
pub const BLACKLIST_DIRS: [&str; 6] = [
    "node_modules",
    "bower_components",
    "jspm_packages",
    "dist",
    "logs",
    "bin",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRewriteOutcome {
    Rewritten,
    /// not an allowed extension, or a hidden file
    Skipped,
    /// left with its original bytes; holds the reason
    Reverted(String),
}

/// Every file the walk visited, in traversal order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub files: Vec<(PathBuf, FileRewriteOutcome)>,
}

impl RewriteReport {
    pub fn outcome(&self, path: impl AsRef<Path>) -> Option<&FileRewriteOutcome> {
        self.files
            .iter()
            .find(|(p, _)| p == path.as_ref())
            .map(|(_, outcome)| outcome)
    }

    pub fn rewritten(&self) -> usize {
        self.count(|o| *o == FileRewriteOutcome::Rewritten)
    }

    pub fn reverted(&self) -> usize {
        self.count(|o| matches!(o, FileRewriteOutcome::Reverted(_)))
    }

    fn count(&self, predicate: impl Fn(&FileRewriteOutcome) -> bool) -> usize {
        self.files.iter().filter(|(_, o)| predicate(o)).count()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_pruned_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    is_hidden(entry)
        || entry
            .file_name()
            .to_str()
            .is_some_and(|name| BLACKLIST_DIRS.contains(&name))
}

pub fn has_allowed_extension(file_name: &str) -> bool {
    let lowered = file_name.to_lowercase();
    ALLOWED_EXTENSIONS
        .iter()
        .any(|ext| lowered.ends_with(ext))
}

/// Render every eligible file below `root` in place with `project_name`.
///
/// A file that cannot be rendered keeps its original bytes and is reported;
/// only a failure to walk the tree itself is returned as an error.
pub fn rewrite_tree(root: impl AsRef<Path>, project_name: &str) -> Result<RewriteReport> {
    let root = root.as_ref();
    let walk_setup = |path: &Path, source: io::Error| ButlerError::WalkSetup {
        path: path.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(root).map_err(|e| walk_setup(root, e))?;
    if !metadata.is_dir() {
        return Err(walk_setup(
            root,
            io::Error::new(io::ErrorKind::Other, "not a directory"),
        ));
    }

    let renderer = Renderer::new(project_name);
    let mut report = RewriteReport::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_pruned_dir(entry));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            walk_setup(&path, io::Error::from(e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let eligible = !is_hidden(&entry)
            && entry
                .file_name()
                .to_str()
                .is_some_and(has_allowed_extension);
        let outcome = if eligible {
            match rewrite_file(path, &renderer) {
                Ok(()) => {
                    debug!("{} {}", style("Rewritten:").bold(), path.display());
                    FileRewriteOutcome::Rewritten
                }
                Err(e) => {
                    let reason = one_line(&e.to_string());
                    warn!(
                        "butler: File {} recovered due to invalid template! Error: {}",
                        path.display(),
                        reason
                    );
                    FileRewriteOutcome::Reverted(reason)
                }
            }
        } else {
            debug!("{} {}", style("Skipped:").dim(), path.display());
            FileRewriteOutcome::Skipped
        };
        report.files.push((path.to_path_buf(), outcome));
    }

    Ok(report)
}

/// Error text spread over several lines (liquid's are) folded onto one.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render one file in place. On error the file holds its original bytes.
fn rewrite_file(path: &Path, renderer: &Renderer) -> Result<(), RewriteError> {
    let original = fs::read(path).map_err(RewriteError::Read)?;
    let content = String::from_utf8(original)?;
    let rendered = renderer.render(&content)?;
    if rendered == content {
        return Ok(());
    }
    // nothing is lost until the file has been opened and truncated
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(RewriteError::Write)?;
    if let Err(e) = file.write_all(rendered.as_bytes()) {
        drop(file);
        if let Err(restore) = fs::write(path, content.as_bytes()) {
            warn!(
                "butler: File {} could not be restored! Error: {}",
                path.display(),
                restore
            );
        }
        return Err(RewriteError::Write(e));
    }
    Ok(())
}
