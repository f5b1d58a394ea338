//! Source file collection.
//!
//! Recursively walks the given roots and collects every file with the
//! requested extension. Skipping entries whose names start with `.` or `_`
//! (such as `.dart_tool/`) is opt-in, and additional glob patterns can be
//! excluded.

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Which entries to leave out of a walk.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    excludes: Vec<Pattern>,
    skip_hidden: bool,
}

impl FileFilter {
    /// Builds a filter from glob patterns such as `"generated"` or `"*.g.dart"`.
    ///
    /// With `skip_hidden`, entries below a root whose names start with `.` or
    /// `_` are left out as well.
    pub fn new(excludes: &[String], skip_hidden: bool) -> Result<Self> {
        let excludes = excludes
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid exclude pattern '{}'", p)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            excludes,
            skip_hidden,
        })
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        // Never filter the root itself; `.` would otherwise exclude everything.
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_str();
        if self.skip_hidden && name.is_some_and(|s| s.starts_with('.') || s.starts_with('_'))
        {
            return true;
        }

        self.excludes.iter().any(|pattern| {
            name.is_some_and(|s| pattern.matches(s)) || pattern.matches_path(entry.path())
        })
    }
}

/// Collects all files ending in `.{extension}` under `paths`.
///
/// Roots that do not exist are skipped with a warning. Within each directory
/// entries are visited in file-name order. Symlinked files are included;
/// symlinked directories are not descended into.
pub fn collect_files(
    paths: &[PathBuf],
    extension: &str,
    filter: &FileFilter,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            eprintln!(
                "{} Skipping missing directory {}",
                "warn:".yellow().bold(),
                path.display()
            );
            continue;
        }

        for entry in WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !filter.is_excluded(e))
        {
            let entry = entry.with_context(|| format!("Failed to walk {}", path.display()))?;
            if is_file(&entry) && has_extension(entry.path(), extension) {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        for rel in [
            "screens/main_screen.dart",
            "screens/user/training_screen.dart",
            "screens/admin/program_constructor_screen.dart",
            "screens/notes.md",
            "screens/.dart_tool/cache.dart",
            "screens/_old/legacy_screen.dart",
            "screens/_tabs.dart",
            "screens/user/training_screen.g.dart",
        ] {
            touch(dir.path(), rel);
        }
        dir
    }

    #[test]
    fn collects_every_matching_file_in_name_order() {
        let dir = tree();
        let files = collect_files(
            &[dir.path().join("screens")],
            "dart",
            &FileFilter::default(),
        )
        .unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec![
                "screens/.dart_tool/cache.dart",
                "screens/_old/legacy_screen.dart",
                "screens/_tabs.dart",
                "screens/admin/program_constructor_screen.dart",
                "screens/main_screen.dart",
                "screens/user/training_screen.dart",
                "screens/user/training_screen.g.dart",
            ]
        );
    }

    #[test]
    fn glob_excludes_apply_to_names() {
        let dir = tree();
        let filter = FileFilter::new(&["*.g.dart".to_string(), "admin".to_string()], true).unwrap();
        let files = collect_files(&[dir.path().join("screens")], "dart", &filter).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec!["screens/main_screen.dart", "screens/user/training_screen.dart"]
        );
    }

    #[test]
    fn skip_hidden_leaves_out_dot_and_underscore_entries() {
        let dir = tree();
        let filter = FileFilter::new(&[], true).unwrap();
        let files = collect_files(&[dir.path().join("screens")], "dart", &filter).unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec![
                "screens/admin/program_constructor_screen.dart",
                "screens/main_screen.dart",
                "screens/user/training_screen.dart",
                "screens/user/training_screen.g.dart",
            ]
        );
    }

    #[test]
    fn hidden_root_is_still_walked() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".app/lib/a.dart");
        let filter = FileFilter::new(&[], true).unwrap();
        let files = collect_files(&[dir.path().join(".app")], "dart", &filter).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_collected() {
        let dir = tree();
        std::os::unix::fs::symlink(
            dir.path().join("screens/main_screen.dart"),
            dir.path().join("screens/user/linked_screen.dart"),
        )
        .unwrap();
        let files = collect_files(
            &[dir.path().join("screens/user")],
            "dart",
            &FileFilter::default(),
        )
        .unwrap();
        assert_eq!(
            names(dir.path(), &files),
            vec![
                "screens/user/linked_screen.dart",
                "screens/user/training_screen.dart",
                "screens/user/training_screen.g.dart",
            ]
        );
    }

    #[test]
    fn missing_root_is_skipped() {
        let dir = tree();
        let files = collect_files(
            &[dir.path().join("does-not-exist"), dir.path().join("screens")],
            "dart",
            &FileFilter::default(),
        )
        .unwrap();
        assert_eq!(files.len(), 7);
    }

    #[test]
    fn invalid_exclude_pattern_is_an_error() {
        assert!(FileFilter::new(&["[".to_string()], true).is_err());
    }
}
