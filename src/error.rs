use thiserror::Error;

/// Unified error type for commit-derive operations
#[derive(Error, Debug)]
pub enum DeriveError {
    #[error("Unrecognized branch type '{prefix}' in branch '{branch}'")]
    UnrecognizedBranchType { branch: String, prefix: String },

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commit-derive
pub type Result<T> = std::result::Result<T, DeriveError>;

impl DeriveError {
    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        DeriveError::Branch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DeriveError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        DeriveError::Version(msg.into())
    }
}
