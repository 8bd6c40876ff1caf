//! Git operations abstraction layer
//!
//! The CI pipeline hands commit-derive a branch and PR text, but the commit
//! set for a release is collected from the repository itself. The
//! [Repository] trait defines the few operations needed; concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash
    pub hash: String,
    /// The commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

/// Common git operation trait for abstraction
pub trait Repository {
    /// OID of the current HEAD commit
    fn head_oid(&self) -> Result<Oid>;

    /// Resolve a revision string (branch, remote ref, tag) to a commit OID
    fn resolve_ref(&self, reference: &str) -> Result<Oid>;

    /// Merge base of two commits
    fn merge_base(&self, one: Oid, two: Oid) -> Result<Oid>;

    /// Commits after `from` up to and including `to`, oldest first
    fn commits_between(&self, from: Oid, to: Oid) -> Result<Vec<CommitInfo>>;
}

/// Collect commit messages on HEAD since it diverged from `base_ref`.
///
/// This mirrors what the pipeline does for a PR branch: merge-base against
/// the main line, then every commit from there to HEAD.
pub fn messages_since<R: Repository>(repo: &R, base_ref: &str) -> Result<Vec<String>> {
    let head = repo.head_oid()?;
    let base = repo.resolve_ref(base_ref)?;
    let merge_base = repo.merge_base(base, head)?;
    let commits = repo.commits_between(merge_base, head)?;
    Ok(commits.into_iter().map(|c| c.message).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_since_with_mock() {
        let mut repo = MockRepository::new();
        let base = repo.push_commit("abc1001", "chore: init", "tester");
        repo.push_commit("abc1002", "feat(core): add cache", "tester");
        repo.push_commit("abc1003", "fix: flush on exit", "tester");
        repo.set_ref("origin/main", base);

        let messages = messages_since(&repo, "origin/main").unwrap();
        assert_eq!(
            messages,
            vec![
                "feat(core): add cache".to_string(),
                "fix: flush on exit".to_string(),
            ]
        );
    }

    #[test]
    fn test_messages_since_no_new_commits() {
        let mut repo = MockRepository::new();
        let base = repo.push_commit("abc1001", "chore: init", "tester");
        repo.set_ref("origin/main", base);

        let messages = messages_since(&repo, "origin/main").unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn test_messages_since_unknown_ref() {
        let mut repo = MockRepository::new();
        repo.push_commit("abc1001", "chore: init", "tester");

        assert!(messages_since(&repo, "origin/missing").is_err());
    }
}
