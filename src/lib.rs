pub mod analyzer;
pub mod changelog;
pub mod config;
pub mod deriver;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use error::{DeriveError, Result};
