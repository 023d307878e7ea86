//! Runtime configuration
//!
//! Merged from built-in defaults, an optional TOML file, and command-line
//! overrides (highest precedence). The result is passed to [`crate::app::App`]
//! and from there to the [`crate::git::GitExecutor`].

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::git::FormatProfile;
use crate::model::NO_FILTER_LABEL;

/// Filter buttons shown when nothing else is configured
pub const DEFAULT_FILTER_LABELS: &[&str] = &["Java", "C", "C++", "Python", NO_FILTER_LABEL];

/// Errors while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Effective configuration for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository whose history is shown
    pub repo_path: PathBuf,
    /// `git log` output layout
    pub profile: FormatProfile,
    /// Labels of the filter buttons, in display order (always ends up containing `None`)
    pub filter_labels: Vec<String>,
    /// Upper bound on the number of commits read
    pub max_count: Option<usize>,
    /// Where tracing output goes; no logging when unset
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            profile: FormatProfile::default(),
            filter_labels: DEFAULT_FILTER_LABELS.iter().map(|s| s.to_string()).collect(),
            max_count: None,
            log_file: None,
        }
    }
}

/// Values set on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub repo_path: Option<PathBuf>,
    pub profile: Option<FormatProfile>,
    /// Replaces the configured labels when non-empty
    pub filter_labels: Vec<String>,
    pub max_count: Option<usize>,
    pub log_file: Option<PathBuf>,
}

/// Private: parsed representation of a gitmon config file.
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    repo_path: Option<PathBuf>,
    profile: Option<FormatProfile>,
    filter_labels: Option<Vec<String>>,
    max_count: Option<usize>,
    log_file: Option<PathBuf>,
}

impl Config {
    /// `{config_dir}/gitmon/config.toml` (e.g. `~/.config/gitmon/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("gitmon").join("config.toml"))
    }

    /// Load the configuration file
    ///
    /// An explicitly named file must exist and parse. The default file is
    /// optional: when missing, built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();

        let config = Self {
            repo_path: file.repo_path.unwrap_or(defaults.repo_path),
            profile: file.profile.unwrap_or(defaults.profile),
            filter_labels: file.filter_labels.unwrap_or(defaults.filter_labels),
            max_count: file.max_count.or(defaults.max_count),
            log_file: file.log_file.or(defaults.log_file),
        };
        Ok(config.normalized())
    }

    /// Apply command-line overrides
    pub fn with_overrides(self, overrides: Overrides) -> Self {
        let filter_labels = if overrides.filter_labels.is_empty() {
            self.filter_labels
        } else {
            overrides.filter_labels
        };

        Self {
            repo_path: overrides.repo_path.unwrap_or(self.repo_path),
            profile: overrides.profile.unwrap_or(self.profile),
            filter_labels,
            max_count: overrides.max_count.or(self.max_count),
            log_file: overrides.log_file.or(self.log_file),
        }
        .normalized()
    }

    /// Drop blank and duplicate labels and make sure `None` is offered
    fn normalized(mut self) -> Self {
        let mut labels: Vec<String> = Vec::with_capacity(self.filter_labels.len() + 1);
        for label in self.filter_labels {
            let label = label.trim().to_string();
            if !label.is_empty() && !labels.contains(&label) {
                labels.push(label);
            }
        }
        if !labels.iter().any(|l| l == NO_FILTER_LABEL) {
            labels.push(NO_FILTER_LABEL.to_string());
        }
        self.filter_labels = labels;
        self
    }
}
