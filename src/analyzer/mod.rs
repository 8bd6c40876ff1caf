//! Commit-set analysis for release decisions

pub mod bump_analyzer;

pub use bump_analyzer::{analyze_messages, analyze_records};
