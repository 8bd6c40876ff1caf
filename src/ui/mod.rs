//! User-facing output for CI pipeline logs.
//!
//! All diagnostics go to stderr: stdout carries the machine-readable
//! results (commit message line, `bump=`/`version=` pairs, changelog
//! markdown) consumed by the surrounding pipeline step.

pub mod formatter;

pub use formatter::{display_commit_analysis, display_error, display_status, display_success};
