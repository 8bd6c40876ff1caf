//! Squash-commit derivation: branch name + PR title -> commit record.
//!
//! Precedence: a PR title that is already a well-formed conventional commit
//! overrides everything derived from the branch name. The branch is still
//! classified first so an unrecognizable branch fails the pipeline before
//! any message is synthesized.

use crate::config::ConventionalCommitsConfig;
use crate::domain::{CommitRecord, ParsedBranch};
use crate::error::Result;

/// How the final commit message was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivedMessage {
    /// PR title was already a conventional commit; used as-is
    Override(CommitRecord),
    /// Synthesized from branch-derived type/scope and the PR title or
    /// branch description
    Derived(CommitRecord),
}

impl DerivedMessage {
    pub fn record(&self) -> &CommitRecord {
        match self {
            DerivedMessage::Override(record) | DerivedMessage::Derived(record) => record,
        }
    }

    pub fn into_record(self) -> CommitRecord {
        match self {
            DerivedMessage::Override(record) | DerivedMessage::Derived(record) => record,
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, DerivedMessage::Override(_))
    }
}

/// Derive the squashed commit record for a branch push or PR event.
///
/// The branch `!` marker and an override title's own `!` are authoritative;
/// a breaking-change marker in the PR description ORs into either path.
pub fn derive_commit(
    branch: &str,
    pr_title: Option<&str>,
    pr_body: Option<&str>,
    config: &ConventionalCommitsConfig,
) -> Result<DerivedMessage> {
    let parsed = ParsedBranch::parse(branch)?;

    let body_breaking = pr_body
        .map(|body| config.contains_breaking_marker(body))
        .unwrap_or(false);

    if let Some(title) = pr_title {
        if let Some(mut record) = CommitRecord::parse(title.trim()) {
            record.breaking = record.breaking || body_breaking;
            return Ok(DerivedMessage::Override(record));
        }
    }

    let subject = pr_title
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| parsed.description.clone());

    Ok(DerivedMessage::Derived(CommitRecord {
        commit_type: parsed.commit_type,
        scope: parsed.scope,
        subject,
        breaking: parsed.breaking || body_breaking,
    }))
}
