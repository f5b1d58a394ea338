//! dart-import-fix library for rewriting import paths in Dart sources.
//!
//! The workflow is a single pass:
//!
//! 1. **Rules**: pick a built-in [`presets::Preset`] or load a JSON rule file
//! 2. **Scanning**: collect `.dart` files under the roots
//! 3. **Rewriting**: run each file through the rule set and write back changes
//!
//! # Example
//!
//! ```no_run
//! use dart_import_fix::{presets, rewriter, scanner};
//!
//! let rules = presets::Preset::Screens.rule_set().unwrap();
//! let files = scanner::collect_files(
//!     &presets::default_roots(),
//!     presets::DEFAULT_EXTENSION,
//!     &scanner::FileFilter::default(),
//! )
//! .unwrap();
//!
//! let summary = rewriter::rewrite_tree(&files, &rules, |change| {
//!     println!("[UPDATED] {}", change.path.display());
//!     Ok(true)
//! })
//! .unwrap();
//!
//! println!("{} files updated", summary.files_written);
//! ```

pub mod diff;
pub mod presets;
pub mod rewriter;
pub mod rules;
pub mod scanner;

// Re-export commonly used types at crate root
pub use rewriter::{FileChange, RewriteSummary};
pub use rules::{Rule, RuleSet};
