use crate::error::{DeriveError, Result};
use std::fmt;
use std::str::FromStr;

/// Canonical Conventional Commit type after alias resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Chore,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Ci,
}

/// Changelog section order: release-relevant types first
pub const SECTION_ORDER: [CommitType; 9] = [
    CommitType::Feat,
    CommitType::Fix,
    CommitType::Perf,
    CommitType::Refactor,
    CommitType::Docs,
    CommitType::Style,
    CommitType::Test,
    CommitType::Ci,
    CommitType::Chore,
];

impl CommitType {
    /// Resolve a branch-name prefix through the fixed alias table.
    ///
    /// Returns `None` for prefixes outside the table; callers must treat
    /// that as a classification failure, not guess a type.
    pub fn from_branch_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_lowercase().as_str() {
            "feature" | "feat" => Some(CommitType::Feat),
            "fix" | "bugfix" | "hotfix" | "patch" => Some(CommitType::Fix),
            "chore" => Some(CommitType::Chore),
            "docs" => Some(CommitType::Docs),
            "style" => Some(CommitType::Style),
            "refactor" => Some(CommitType::Refactor),
            "perf" => Some(CommitType::Perf),
            "test" => Some(CommitType::Test),
            "ci" => Some(CommitType::Ci),
            _ => None,
        }
    }

    /// The canonical token used in commit messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Chore => "chore",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Ci => "ci",
        }
    }

    /// Section title used when grouping changelog entries
    pub fn section_title(&self) -> &'static str {
        match self {
            CommitType::Feat => "Features",
            CommitType::Fix => "Bug Fixes",
            CommitType::Perf => "Performance Improvements",
            CommitType::Refactor => "Code Refactoring",
            CommitType::Docs => "Documentation",
            CommitType::Style => "Styles",
            CommitType::Test => "Tests",
            CommitType::Ci => "Continuous Integration",
            CommitType::Chore => "Miscellaneous Chores",
        }
    }
}

impl FromStr for CommitType {
    type Err = DeriveError;

    /// Parse a canonical token only; aliases are resolved by
    /// [CommitType::from_branch_prefix]
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "feat" => Ok(CommitType::Feat),
            "fix" => Ok(CommitType::Fix),
            "chore" => Ok(CommitType::Chore),
            "docs" => Ok(CommitType::Docs),
            "style" => Ok(CommitType::Style),
            "refactor" => Ok(CommitType::Refactor),
            "perf" => Ok(CommitType::Perf),
            "test" => Ok(CommitType::Test),
            "ci" => Ok(CommitType::Ci),
            other => Err(DeriveError::branch(format!(
                "Unknown commit type token: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
