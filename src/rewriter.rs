//! Rule application over files.
//!
//! Each file is read once, run through the whole rule set in memory, and
//! written back only when the result differs from what was read. Files are
//! independent of each other; the first read or write failure stops the pass.

use crate::diff;
use crate::rules::RuleSet;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file whose content the rule set changes.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub original: String,
    pub rewritten: String,
}

impl FileChange {
    /// Overwrites the file with the rewritten content.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.rewritten)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    pub fn diff(&self) -> String {
        diff::unified_diff(&self.original, &self.rewritten, &self.path)
    }

    pub fn colorized_diff(&self) -> String {
        diff::colorized_diff(&self.original, &self.rewritten, &self.path)
    }
}

/// Counters and changed paths from a rewrite pass.
#[derive(Debug, Default, Serialize)]
pub struct RewriteSummary {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub files_written: usize,
    pub insertions: usize,
    pub deletions: usize,
    pub changed: Vec<PathBuf>,
}

/// Applies `rules` to `content`. Depends on nothing but its arguments.
pub fn rewrite_content(content: &str, rules: &RuleSet) -> String {
    rules.apply(content)
}

/// Reads `path` and returns the change the rule set would make, if any.
pub fn rewrite_file(path: &Path, rules: &RuleSet) -> Result<Option<FileChange>> {
    let original = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rewritten = rewrite_content(&original, rules);

    if rewritten == original {
        return Ok(None);
    }

    Ok(Some(FileChange {
        path: path.to_path_buf(),
        original,
        rewritten,
    }))
}

/// Runs `rules` over every file in `files`.
///
/// `decide` sees each changed file before anything is written and returns
/// whether to write it. Unchanged files never reach `decide`.
pub fn rewrite_tree<F>(files: &[PathBuf], rules: &RuleSet, decide: F) -> Result<RewriteSummary>
where
    F: FnMut(&FileChange) -> Result<bool>,
{
    rewrite_tree_with(files, rules, decide, |_| {})
}

/// Same as [`rewrite_tree`], calling `written` once a file has actually been
/// overwritten. A failed write stops the pass before `written` runs.
pub fn rewrite_tree_with<F, W>(
    files: &[PathBuf],
    rules: &RuleSet,
    mut decide: F,
    mut written: W,
) -> Result<RewriteSummary>
where
    F: FnMut(&FileChange) -> Result<bool>,
    W: FnMut(&FileChange),
{
    let mut summary = RewriteSummary {
        files_scanned: files.len(),
        ..Default::default()
    };

    for file in files {
        let Some(change) = rewrite_file(file, rules)? else {
            continue;
        };

        let (insertions, deletions) = diff::line_changes(&change.original, &change.rewritten);
        summary.files_changed += 1;
        summary.insertions += insertions;
        summary.deletions += deletions;
        summary.changed.push(change.path.clone());

        if decide(&change)? {
            change.write()?;
            summary.files_written += 1;
            written(&change);
        }
    }

    Ok(summary)
}
