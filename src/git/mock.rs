use crate::error::{DeriveError, Result};
use crate::git::{CommitInfo, Repository};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations.
///
/// Models a linear history: commits are appended oldest-first and HEAD is
/// the last pushed commit.
pub struct MockRepository {
    log: Vec<(Oid, CommitInfo)>,
    refs: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            log: Vec::new(),
            refs: HashMap::new(),
        }
    }

    /// Append a commit to the linear history and return its OID.
    ///
    /// `seed` is a hex fragment used to build a deterministic OID.
    pub fn push_commit(&mut self, seed: &str, message: &str, author: &str) -> Oid {
        let padded = format!("{:0<40}", seed);
        let oid = Oid::from_str(&padded).unwrap_or_else(|_| Oid::zero());

        self.log.push((
            oid,
            CommitInfo {
                hash: oid.to_string(),
                message: message.to_string(),
                author: author.to_string(),
            },
        ));
        oid
    }

    /// Point a named ref at an OID
    pub fn set_ref(&mut self, name: impl Into<String>, oid: Oid) {
        self.refs.insert(name.into(), oid);
    }

    fn position(&self, oid: Oid) -> Result<usize> {
        self.log
            .iter()
            .position(|(id, _)| *id == oid)
            .ok_or_else(|| DeriveError::branch(format!("Unknown commit: {}", oid)))
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.log
            .last()
            .map(|(oid, _)| *oid)
            .ok_or_else(|| DeriveError::branch("Mock repository has no commits"))
    }

    fn resolve_ref(&self, reference: &str) -> Result<Oid> {
        self.refs
            .get(reference)
            .copied()
            .ok_or_else(|| DeriveError::branch(format!("Cannot resolve '{}'", reference)))
    }

    fn merge_base(&self, one: Oid, two: Oid) -> Result<Oid> {
        // Linear history: the merge base is whichever commit is older
        let pos_one = self.position(one)?;
        let pos_two = self.position(two)?;
        Ok(if pos_one <= pos_two { one } else { two })
    }

    fn commits_between(&self, from: Oid, to: Oid) -> Result<Vec<CommitInfo>> {
        let start = self.position(from)?;
        let end = self.position(to)?;
        if start >= end {
            return Ok(Vec::new());
        }
        Ok(self.log[start + 1..=end]
            .iter()
            .map(|(_, info)| info.clone())
            .collect())
    }
}
