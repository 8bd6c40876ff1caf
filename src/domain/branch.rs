use crate::domain::CommitType;
use crate::error::{DeriveError, Result};

/// Structured form of a `type/scope-description` branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBranch {
    pub commit_type: CommitType,
    pub scope: Option<String>,
    /// Humanized description segment, used as the subject when no PR title
    /// is available
    pub description: String,
    pub breaking: bool,
}

impl ParsedBranch {
    /// Classify a branch name into type, scope, and description.
    ///
    /// Accepted shapes:
    /// - `feature/api-new-endpoint` -> feat, scope `api`, "New endpoint"
    /// - `hotfix/credentials` -> fix, no scope, "Credentials"
    /// - `feature/api-breaking-change!` -> breaking = true
    ///
    /// An unrecognized type prefix is a hard failure; the invoking pipeline
    /// step must fail closed rather than guess a type.
    pub fn parse(branch: &str) -> Result<Self> {
        let name = branch.trim().trim_start_matches("refs/heads/");

        // Trailing '!' marks a breaking change and is not part of the name
        let (name, breaking) = match name.strip_suffix('!') {
            Some(stripped) => (stripped, true),
            None => (name, false),
        };

        let (prefix, remainder) = name.split_once('/').unwrap_or((name, ""));

        let commit_type = CommitType::from_branch_prefix(prefix).ok_or_else(|| {
            DeriveError::UnrecognizedBranchType {
                branch: branch.to_string(),
                prefix: prefix.to_string(),
            }
        })?;

        if remainder.is_empty() {
            return Err(DeriveError::branch(format!(
                "Branch '{}' has no description after its type prefix",
                branch
            )));
        }

        let (scope, description) = split_scope(remainder);

        Ok(ParsedBranch {
            commit_type,
            scope,
            description: humanize(&description),
            breaking,
        })
    }
}

/// Split the post-prefix segment into an optional scope and a description.
///
/// The scope is the token before the first `-` or `_`, and only counts when
/// a non-empty description follows it.
fn split_scope(remainder: &str) -> (Option<String>, String) {
    match remainder.split_once(['-', '_']) {
        Some((scope, rest)) if !scope.is_empty() && !rest.is_empty() => {
            (Some(scope.to_string()), rest.to_string())
        }
        _ => (None, remainder.to_string()),
    }
}

/// Turn a kebab/snake description into a readable subject:
/// separators become spaces, first letter is capitalized.
fn humanize(description: &str) -> String {
    let spaced: String = description
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    let collapsed = spaced.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => collapsed,
    }
}
