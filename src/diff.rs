//! Unified diffs for previewing rewrites.

use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;
use std::path::Path;

/// Renders a unified diff between `original` and `modified` with three lines of context.
pub fn unified_diff(original: &str, modified: &str, path: &Path) -> String {
    render(original, modified, path, false)
}

/// Same as [`unified_diff`], with removed lines in red and added lines in green.
pub fn colorized_diff(original: &str, modified: &str, path: &Path) -> String {
    render(original, modified, path, true)
}

fn render(original: &str, modified: &str, path: &Path, color: bool) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut output = String::new();

    let header = format!("--- a/{}\n+++ b/{}\n", path.display(), path.display());
    if color {
        output.push_str(&header.cyan().to_string());
    } else {
        output.push_str(&header);
    }

    for group in diff.grouped_ops(3) {
        for op in group {
            for change in diff.iter_changes(&op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let mut line = format!("{}{}", sign, change.value());
                if change.missing_newline() {
                    line.push('\n');
                }
                let line = match (color, change.tag()) {
                    (true, ChangeTag::Delete) => line.red().to_string(),
                    (true, ChangeTag::Insert) => line.green().to_string(),
                    _ => line,
                };
                // Writing into a String cannot fail.
                let _ = write!(output, "{}", line);
            }
        }
    }

    output
}

/// Counts inserted and deleted lines between two versions of a file.
pub fn line_changes(original: &str, modified: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(original, modified);
    let mut insertions = 0;
    let mut deletions = 0;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => insertions += 1,
            ChangeTag::Delete => deletions += 1,
            ChangeTag::Equal => {}
        }
    }
    (insertions, deletions)
}
