use crate::domain::BREAKING_MARKERS;
use crate::error::{DeriveError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for commit-derive.
///
/// Contains conventional commit settings and release computation options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            conventional_commits: ConventionalCommitsConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    BREAKING_MARKERS.iter().map(|s| s.to_string()).collect()
}

/// Configuration for conventional commit analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,
}

impl ConventionalCommitsConfig {
    /// Scan text (typically a PR description) for a configured
    /// breaking-change indicator
    pub fn contains_breaking_marker(&self, text: &str) -> bool {
        self.breaking_change_indicators
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            breaking_change_indicators: default_breaking_change_indicators(),
        }
    }
}

fn default_initial_version() -> String {
    "0.1.0".to_string()
}

fn default_base_ref() -> String {
    "origin/main".to_string()
}

/// Configuration for release computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Version used when no current version/tag is supplied
    #[serde(default = "default_initial_version")]
    pub initial_version: String,

    /// Base ref to diff against when collecting commits from git
    #[serde(default = "default_base_ref")]
    pub base_ref: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            initial_version: default_initial_version(),
            base_ref: default_base_ref(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commitderive.toml` in current directory
/// 3. `~/.config/.commitderive.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./commitderive.toml").exists() {
        fs::read_to_string("./commitderive.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".commitderive.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| DeriveError::config(format!("Invalid TOML: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breaking_indicators() {
        let config = ConventionalCommitsConfig::default();
        assert!(config
            .breaking_change_indicators
            .contains(&"BREAKING CHANGE:".to_string()));
        assert!(config
            .breaking_change_indicators
            .contains(&"BREAKING-CHANGE:".to_string()));
    }

    #[test]
    fn test_contains_breaking_marker() {
        let config = ConventionalCommitsConfig::default();
        assert!(config.contains_breaking_marker("BREAKING CHANGE: renamed field"));
        assert!(config.contains_breaking_marker("body\n\nBREAKING-CHANGE: gone"));
        assert!(!config.contains_breaking_marker("nothing to see here"));
    }

    #[test]
    fn test_release_defaults() {
        let config = ReleaseConfig::default();
        assert_eq!(config.initial_version, "0.1.0");
        assert_eq!(config.base_ref, "origin/main");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
[release]
base_ref = "origin/master"
"#,
        )
        .unwrap();

        assert_eq!(config.release.base_ref, "origin/master");
        // Unspecified sections fall back to defaults
        assert_eq!(config.release.initial_version, "0.1.0");
        assert!(!config
            .conventional_commits
            .breaking_change_indicators
            .is_empty());
    }
}
