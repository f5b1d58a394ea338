//! Substitution rules.
//!
//! A [`Rule`] pairs a regular expression with a literal replacement. A
//! [`RuleSet`] applies its rules in order over the whole text of a file, each
//! rule consuming the previous rule's output. Rule sets come either from the
//! built-in presets or from a JSON rule file.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single pattern-to-replacement substitution.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Builds a rule from a regex pattern. The replacement is inserted verbatim.
    pub fn regex(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern =
            Regex::new(pattern).with_context(|| format!("Invalid rule pattern '{}'", pattern))?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// Builds a rule that deletes every line exactly equal to `line`,
    /// including its line terminator.
    pub fn strip_line(line: &str) -> Result<Self> {
        let pattern = format!(r"(?m)^{}(?:\r?\n|$)", regex::escape(line));
        let pattern =
            Regex::new(&pattern).with_context(|| format!("Invalid strip line '{}'", line))?;
        Ok(Self {
            pattern,
            replacement: String::new(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every match of this rule in `content`.
    pub fn apply(&self, content: &str) -> String {
        self.pattern
            .replace_all(content, NoExpand(&self.replacement))
            .into_owned()
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern.as_str() == other.pattern.as_str() && self.replacement == other.replacement
    }
}

/// An ordered sequence of rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Builds a rule set from `(pattern, replacement)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let rules = pairs
            .iter()
            .map(|(pattern, replacement)| Rule::regex(pattern, replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Builds a rule set that strips each of `lines`.
    pub fn strip_lines(lines: &[&str]) -> Result<Self> {
        let rules = lines
            .iter()
            .map(|line| Rule::strip_line(line))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Appends `other`'s rules after this set's rules.
    pub fn extend(&mut self, other: RuleSet) {
        self.rules.extend(other.rules);
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs `content` through every rule in order.
    pub fn apply(&self, content: &str) -> String {
        let mut result = content.to_string();
        for rule in &self.rules {
            // Skip the copy when nothing matches; most rules miss most files.
            if rule.pattern.is_match(&result) {
                result = rule.apply(&result);
            }
        }
        result
    }

    /// Returns `(index, first_index)` for every rule that repeats an earlier one.
    pub fn duplicates(&self) -> Vec<(usize, usize)> {
        let mut dups = Vec::new();
        for (i, rule) in self.rules.iter().enumerate() {
            if let Some(first) = self.rules[..i].iter().position(|r| r == rule) {
                dups.push((i, first));
            }
        }
        dups
    }
}

/// One entry of a JSON rule file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleSpec {
    Replace { pattern: String, replacement: String },
    StripLine { strip_line: String },
}

impl RuleSpec {
    pub fn into_rule(self) -> Result<Rule> {
        match self {
            RuleSpec::Replace {
                pattern,
                replacement,
            } => Rule::regex(&pattern, &replacement),
            RuleSpec::StripLine { strip_line } => Rule::strip_line(&strip_line),
        }
    }
}

/// Parses a rule set from the JSON rule-file format.
pub fn parse_rule_file(source: &str) -> Result<RuleSet> {
    let specs: Vec<RuleSpec> = serde_json::from_str(source).context("Failed to parse rule file")?;
    let rules = specs
        .into_iter()
        .map(RuleSpec::into_rule)
        .collect::<Result<Vec<_>>>()?;
    Ok(RuleSet::new(rules))
}

/// Reads and parses a JSON rule file.
pub fn load_rule_file(path: &Path) -> Result<RuleSet> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rule file {}", path.display()))?;
    parse_rule_file(&source).with_context(|| format!("Invalid rule file {}", path.display()))
}
