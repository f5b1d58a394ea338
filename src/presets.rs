//! Built-in rule tables for the screen reorganization.
//!
//! The tables are ordered; entries repeated per screen category are kept as
//! they are, since applying an identical rule twice changes nothing.

use crate::rules::RuleSet;
use anyhow::Result;
use clap::ValueEnum;
use std::path::PathBuf;

/// Directories the rewrite runs over when no paths are given.
pub const DEFAULT_ROOTS: &[&str] = &[
    "lib/screens/",
    "lib/widgets/",
    "lib/providers/",
    "lib/services/",
    "lib/constants/",
    "lib/models/",
];

/// Extension of the files the rewrite touches.
pub const DEFAULT_EXTENSION: &str = "dart";

/// Moves screens into `user/`, `admin/`, `profile/` and `achievements/`.
pub const SCREENS: &[(&str, &str)] = &[
    // main_screen.dart
    (r"import 'training_screen\.dart'", "import 'user/training_screen.dart'"),
    (
        r"import 'achievements_screen\.dart'",
        "import 'achievements/achievements_screen.dart'",
    ),
    (r"import 'profile_screen\.dart'", "import 'profile/profile_screen.dart'"),
    // user screens
    (r"import '../services/", "import '../../services/"),
    (r"import '../widgets/", "import '../../widgets/"),
    (r"import '../constants/", "import '../../constants/"),
    (r"import '../models/", "import '../../models/"),
    (r"import '../providers/", "import '../../providers/"),
    (
        r"import 'program_detail_screen\.dart'",
        "import '../program_detail_screen.dart'",
    ),
    (
        r"import 'program_constructor_screen\.dart'",
        "import '../../admin/program_constructor_screen.dart'",
    ),
    // admin screens
    (r"import '../services/", "import '../../services/"),
    (r"import '../widgets/", "import '../../widgets/"),
    (r"import '../constants/", "import '../../constants/"),
    (r"import '../models/", "import '../../models/"),
    (r"import '../providers/", "import '../../providers/"),
    // profile screens
    (r"import '../services/", "import '../../services/"),
    (r"import '../widgets/", "import '../../widgets/"),
    (r"import '../constants/", "import '../../constants/"),
    (r"import '../models/", "import '../../models/"),
    (r"import '../providers/", "import '../../providers/"),
    // achievements screens
    (r"import '../services/", "import '../../services/"),
    (r"import '../widgets/", "import '../../widgets/"),
    (r"import '../constants/", "import '../../constants/"),
    (r"import '../models/", "import '../../models/"),
    (r"import '../providers/", "import '../../providers/"),
];

/// Points `system_program/` screens at their `admin_program_constructor/` replacements.
pub const ADMIN_CONSTRUCTOR: &[(&str, &str)] = &[
    (
        r"import '../system_program/training_create_screen.dart'",
        "import '../admin_program_constructor/admin_training_create_screen.dart'",
    ),
    (
        r"import '../system_program/training_edit_screen.dart'",
        "import '../admin_program_constructor/admin_training_edit_screen.dart'",
    ),
    (
        r"import '../system_program/exercise_create_screen.dart'",
        "import '../admin_program_constructor/admin_exercise_create_screen.dart'",
    ),
    (
        r"import '../system_program/exercise_edit_screen.dart'",
        "import '../admin_program_constructor/admin_exercise_edit_screen.dart'",
    ),
    (
        r"import '../system_program/exercise_group_create_screen.dart'",
        "import '../admin_program_constructor/admin_exercise_group_create_screen.dart'",
    ),
    (
        r"import '../system_program/exercise_group_edit_screen.dart'",
        "import '../admin_program_constructor/admin_exercise_group_edit_screen.dart'",
    ),
    (
        r"import '../system_program/training_detail_screen.dart'",
        "import '../admin_program_constructor/admin_training_detail_screen.dart'",
    ),
    (
        r"import '../system_program/exercise_group_detail_screen.dart'",
        "import '../admin_program_constructor/admin_exercise_group_detail_screen.dart'",
    ),
    (
        r"import '../system_program/exercise_detail_screen.dart'",
        "import '../admin_program_constructor/admin_exercise_detail_screen.dart'",
    ),
];

/// Import lines that are dead after the move: debug logging and the
/// `system_program/` screens the admin constructor replaced wholesale.
/// None of these is produced by another preset.
pub const UNUSED_IMPORTS: &[&str] = &[
    "import 'dart:developer';",
    "import '../system_program/system_program_screen.dart';",
    "import '../system_program/program_list_screen.dart';",
];

/// A named, built-in rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Screen reorganization into category subdirectories.
    Screens,
    /// Screen reorganization plus the admin program constructor renames.
    AdminConstructor,
    /// Remove unused import lines.
    UnusedImports,
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Screens => "screens",
            Preset::AdminConstructor => "admin-constructor",
            Preset::UnusedImports => "unused-imports",
        }
    }

    /// Compiles the preset's table into a rule set.
    pub fn rule_set(self) -> Result<RuleSet> {
        match self {
            Preset::Screens => RuleSet::from_pairs(SCREENS),
            Preset::AdminConstructor => {
                let mut rules = RuleSet::from_pairs(SCREENS)?;
                rules.extend(RuleSet::from_pairs(ADMIN_CONSTRUCTOR)?);
                Ok(rules)
            }
            Preset::UnusedImports => RuleSet::strip_lines(UNUSED_IMPORTS),
        }
    }
}

pub fn default_roots() -> Vec<PathBuf> {
    DEFAULT_ROOTS.iter().map(PathBuf::from).collect()
}
