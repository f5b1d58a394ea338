//! dart-import-fix: rewrite import paths across a Dart source tree.
//!
//! Walks the configured roots, runs each `.dart` file through an ordered rule
//! set, and writes back files whose content changed. Running with no arguments
//! applies the screen reorganization rules to the default `lib/` directories.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Commands, FileSelection, RuleSource};
use colored::Colorize;
use dart_import_fix::rewriter::{self, FileChange};
use dart_import_fix::rules::{self, RuleSet};
use dart_import_fix::{presets, scanner};
use dialoguer::Confirm;
use std::path::PathBuf;

/// How changed files are handled during `apply`.
#[derive(Debug, Clone, Copy, Default)]
struct ApplyOptions {
    dry_run: bool,
    diff: bool,
    interactive: bool,
    json: bool,
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        None => cmd_apply(
            &RuleSource::default(),
            &FileSelection::default(),
            ApplyOptions::default(),
        ),
        Some(Commands::Apply {
            rules,
            files,
            dry_run,
            diff,
            interactive,
            json,
            verbose,
        }) => cmd_apply(
            &rules,
            &files,
            ApplyOptions {
                dry_run,
                diff,
                interactive,
                json,
                verbose,
            },
        ),
        Some(Commands::Scan { files }) => cmd_scan(&files),
        Some(Commands::Rules { rules }) => cmd_rules(&rules),
    }
}

/// Loads the rule set and a label describing where it came from.
fn load_rules(source: &RuleSource) -> Result<(String, RuleSet)> {
    match &source.rules {
        Some(path) => Ok((path.display().to_string(), rules::load_rule_file(path)?)),
        None => Ok((source.preset.name().to_string(), source.preset.rule_set()?)),
    }
}

fn collect(selection: &FileSelection) -> Result<Vec<PathBuf>> {
    let roots = selection.paths.clone().unwrap_or_else(presets::default_roots);
    let filter = scanner::FileFilter::new(&selection.exclude, selection.skip_hidden)?;
    scanner::collect_files(&roots, &selection.ext, &filter)
}

fn cmd_apply(source: &RuleSource, selection: &FileSelection, opts: ApplyOptions) -> Result<()> {
    let (label, rules) = load_rules(source)?;
    if opts.verbose {
        eprintln!(
            "{} Loaded {} rules from {}",
            "info:".blue().bold(),
            rules.len(),
            label
        );
    }

    let files = collect(selection)?;
    if opts.verbose {
        eprintln!(
            "{} Found {} .{} files to scan",
            "info:".blue().bold(),
            files.len(),
            selection.ext
        );
    }

    let summary = rewriter::rewrite_tree_with(
        &files,
        &rules,
        |change| decide_change(change, opts),
        |change| report_written(change, opts),
    )?;

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if opts.verbose {
        eprintln!(
            "{} {} insertions(+), {} deletions(-)",
            "info:".blue().bold(),
            summary.insertions,
            summary.deletions
        );
    }

    if summary.files_changed == 0 {
        println!("{} No imports to update", "ok:".green().bold());
    } else if opts.dry_run {
        println!(
            "\n{} {} of {} files would change",
            "ok:".green().bold(),
            summary.files_changed,
            summary.files_scanned
        );
        println!("{} Run without --dry-run to apply changes", "hint:".cyan().bold());
    } else {
        println!(
            "\n{} Imports updated in {} of {} files",
            "ok:".green().bold(),
            summary.files_written,
            summary.files_scanned
        );
    }

    Ok(())
}

/// Decides whether a changed file is written. Dry runs report here since
/// nothing is written afterwards.
fn decide_change(change: &FileChange, opts: ApplyOptions) -> Result<bool> {
    if opts.dry_run {
        if !opts.json {
            println!("{} {}", "Would update:".yellow().bold(), change.path.display());
            if opts.diff {
                print!("{}", change.colorized_diff());
            }
        }
        return Ok(false);
    }

    if opts.interactive {
        print!("{}", change.colorized_diff());
        let confirmed = Confirm::new()
            .with_prompt(format!("Apply changes to {}?", change.path.display()))
            .default(false)
            .interact()?;
        return Ok(confirmed);
    }

    Ok(true)
}

/// Announces a file once its new content is on disk.
fn report_written(change: &FileChange, opts: ApplyOptions) {
    if opts.json {
        return;
    }
    println!("{} {}", "Updated:".yellow().bold(), change.path.display());
    // Interactive runs already showed the diff before asking.
    if opts.diff && !opts.interactive {
        print!("{}", change.colorized_diff());
    }
}

fn cmd_scan(selection: &FileSelection) -> Result<()> {
    let files = collect(selection)?;

    println!("Would scan {} files:", files.len());
    for file in files {
        println!("  {}", file.display());
    }

    Ok(())
}

fn cmd_rules(source: &RuleSource) -> Result<()> {
    let (label, rules) = load_rules(source)?;

    println!("{} ({} rules)", label.bold(), rules.len());
    for (i, rule) in rules.rules().iter().enumerate() {
        let replacement = if rule.replacement().is_empty() {
            "(remove)".dimmed().to_string()
        } else {
            rule.replacement().green().to_string()
        };
        println!("{:>4}  {} -> {}", i + 1, rule.pattern().red(), replacement);
    }

    for (i, first) in rules.duplicates() {
        eprintln!(
            "{} Rule {} repeats rule {}",
            "warn:".yellow().bold(),
            i + 1,
            first + 1
        );
    }

    Ok(())
}
