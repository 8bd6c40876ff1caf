use crate::error::{DeriveError, Result};
use crate::git::CommitInfo;
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| DeriveError::branch("HEAD has no target commit"))
    }

    fn resolve_ref(&self, reference: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(reference)
            .map_err(|e| DeriveError::branch(format!("Cannot resolve '{}': {}", reference, e)))?;

        let commit = object
            .peel_to_commit()
            .map_err(|e| DeriveError::branch(format!("'{}' is not a commit: {}", reference, e)))?;

        Ok(commit.id())
    }

    fn merge_base(&self, one: Oid, two: Oid) -> Result<Oid> {
        Ok(self.repo.merge_base(one, two)?)
    }

    fn commits_between(&self, from: Oid, to: Oid) -> Result<Vec<CommitInfo>> {
        let mut revwalk = self.repo.revwalk()?;

        revwalk.push(to)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if oid == from {
                break;
            }

            let commit = self.repo.find_commit(oid)?;

            let message = commit.message().unwrap_or("(empty message)").to_string();

            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitInfo {
                hash: oid.to_string(),
                message,
                author,
            });
        }

        commits.reverse();
        Ok(commits)
    }
}
