use crate::domain::{CommitType, VersionBump};
use regex::Regex;
use std::fmt;

/// Markers recognized in a message body or PR description in addition to
/// the `!` grammar marker
pub const BREAKING_MARKERS: [&str; 2] = ["BREAKING CHANGE:", "BREAKING-CHANGE:"];

/// A structured commit record: `type(scope)!: subject`.
///
/// Constructed once per branch push or PR event and consumed by changelog
/// grouping and version-bump computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub commit_type: CommitType,
    pub scope: Option<String>,
    pub subject: String,
    pub breaking: bool,
}

impl CommitRecord {
    /// Parse a message that claims the Conventional Commit grammar.
    ///
    /// The leading token must be a canonical type; anything else (including
    /// a message that merely contains a `:`) fails validation and returns
    /// `None` so callers can fall back to branch-derived synthesis.
    ///
    /// Grammar applies to the first line; the whole message is scanned for
    /// breaking-change markers.
    pub fn parse(message: &str) -> Option<Self> {
        let first_line = message.lines().next().unwrap_or("");

        let captures = Regex::new(r"^([a-z]+)(?:\(([^)]+)\))?(!?):\s+(\S.*?)\s*$")
            .ok()
            .and_then(|re| re.captures(first_line))?;

        let commit_type: CommitType = captures.get(1)?.as_str().parse().ok()?;
        let scope = captures.get(2).map(|m| m.as_str().to_string());
        let has_exclamation = captures.get(3).map(|m| m.as_str()) == Some("!");
        let subject = captures.get(4)?.as_str().to_string();

        let breaking = has_exclamation || contains_breaking_marker(message);

        Some(CommitRecord {
            commit_type,
            scope,
            subject,
            breaking,
        })
    }

    /// The version-bump contribution of this single commit.
    ///
    /// Breaking changes dominate; `feat` asks for minor, `fix` and `perf`
    /// for patch, everything else never bumps on its own.
    pub fn bump(&self) -> VersionBump {
        if self.breaking {
            return VersionBump::Major;
        }
        match self.commit_type {
            CommitType::Feat => VersionBump::Minor,
            CommitType::Fix | CommitType::Perf => VersionBump::Patch,
            _ => VersionBump::None,
        }
    }
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.commit_type)?;
        if let Some(scope) = &self.scope {
            write!(f, "({})", scope)?;
        }
        if self.breaking {
            write!(f, "!")?;
        }
        write!(f, ": {}", self.subject)
    }
}

/// Scan text for a literal breaking-change marker
pub fn contains_breaking_marker(text: &str) -> bool {
    BREAKING_MARKERS.iter().any(|marker| text.contains(marker))
}
