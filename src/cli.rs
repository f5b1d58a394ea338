//! Command-line interface definitions.
//!
//! Running without a subcommand applies the `screens` preset to the default
//! roots, the same as `apply` with no flags.

use clap::{Args as ClapArgs, Parser, Subcommand};
use dart_import_fix::presets::{self, Preset};
use std::path::PathBuf;

/// Rewrite and prune import paths across a Dart source tree.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a rule set to every matching file, rewriting files that change.
    Apply {
        #[command(flatten)]
        rules: RuleSource,

        #[command(flatten)]
        files: FileSelection,

        /// Report what would change without writing anything.
        #[arg(long, conflicts_with = "interactive")]
        dry_run: bool,

        /// Print a unified diff for each changed file.
        #[arg(long)]
        diff: bool,

        /// Confirm each file's changes before writing it.
        #[arg(short, long)]
        interactive: bool,

        /// Print the summary as JSON instead of human-readable output.
        #[arg(long, conflicts_with = "interactive")]
        json: bool,

        /// Print additional diagnostics to stderr.
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the files a rewrite would read.
    Scan {
        #[command(flatten)]
        files: FileSelection,
    },

    /// Print a rule set in application order.
    Rules {
        #[command(flatten)]
        rules: RuleSource,
    },
}

/// Where the rule set comes from.
#[derive(Debug, Clone, ClapArgs)]
pub struct RuleSource {
    /// Built-in rule set to apply.
    #[arg(long, value_enum, default_value_t = Preset::Screens)]
    pub preset: Preset,

    /// JSON rule file to use instead of a preset.
    #[arg(long, conflicts_with = "preset")]
    pub rules: Option<PathBuf>,
}

impl Default for RuleSource {
    fn default() -> Self {
        Self {
            preset: Preset::Screens,
            rules: None,
        }
    }
}

/// Which files to visit.
#[derive(Debug, Clone, ClapArgs)]
pub struct FileSelection {
    /// Roots to walk. Defaults to the lib/ screen, widget, provider, service,
    /// constant and model directories.
    #[arg(short, long)]
    pub paths: Option<Vec<PathBuf>>,

    /// File extension to rewrite.
    #[arg(long, default_value = presets::DEFAULT_EXTENSION)]
    pub ext: String,

    /// Glob patterns for directories/files to exclude (e.g., "generated", "*.g.dart").
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Skip entries starting with `.` or `_` (e.g., `.dart_tool`).
    #[arg(long)]
    pub skip_hidden: bool,
}

impl Default for FileSelection {
    fn default() -> Self {
        Self {
            paths: None,
            ext: presets::DEFAULT_EXTENSION.to_string(),
            exclude: Vec::new(),
            skip_hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_has_no_subcommand() {
        let args = Args::try_parse_from(["dart-import-fix"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn apply_defaults() {
        let args = Args::try_parse_from(["dart-import-fix", "apply"]).unwrap();
        let Some(Commands::Apply {
            rules,
            files,
            dry_run,
            ..
        }) = args.command
        else {
            panic!("expected apply");
        };
        assert_eq!(rules.preset, Preset::Screens);
        assert!(rules.rules.is_none());
        assert_eq!(files.ext, "dart");
        assert!(files.paths.is_none());
        assert!(!files.skip_hidden);
        assert!(!dry_run);
    }

    #[test]
    fn apply_with_preset_and_paths() {
        let args = Args::try_parse_from([
            "dart-import-fix",
            "apply",
            "--preset",
            "unused-imports",
            "-p",
            "lib/screens",
            "-p",
            "lib/widgets",
            "--dry-run",
        ])
        .unwrap();
        let Some(Commands::Apply {
            rules,
            files,
            dry_run,
            ..
        }) = args.command
        else {
            panic!("expected apply");
        };
        assert_eq!(rules.preset, Preset::UnusedImports);
        assert_eq!(
            files.paths,
            Some(vec![PathBuf::from("lib/screens"), PathBuf::from("lib/widgets")])
        );
        assert!(dry_run);
    }

    #[test]
    fn dry_run_conflicts_with_interactive() {
        assert!(Args::try_parse_from(["dart-import-fix", "apply", "--dry-run", "-i"]).is_err());
    }

    #[test]
    fn json_conflicts_with_interactive() {
        assert!(Args::try_parse_from(["dart-import-fix", "apply", "--json", "-i"]).is_err());
        assert!(Args::try_parse_from(["dart-import-fix", "apply", "--json", "--dry-run"]).is_ok());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(Args::try_parse_from(["dart-import-fix", "rules", "--preset", "nope"]).is_err());
    }
}
