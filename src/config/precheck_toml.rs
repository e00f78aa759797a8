//! Parsing and validation for precheck.toml configuration files

use crate::error::ConfigError;
use crate::rules::RuleCatalog;
use crate::types::{GlobPattern, RuleId};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE: &str = "precheck.toml";

/// Main configuration struct for precheck.toml
///
/// Every section is optional; an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Built-in rules switched on or off by id
    #[serde(default)]
    pub rules: BTreeMap<RuleId, bool>,

    /// Extra exemptions
    #[serde(default)]
    pub guard: GuardConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load the configuration file if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        self.exclude_set().map(|_| ())
    }

    /// Ids of rules turned off with `id = false`
    pub fn disabled_rules(&self) -> impl Iterator<Item = &RuleId> {
        self.rules
            .iter()
            .filter(|(_, enabled)| !**enabled)
            .map(|(id, _)| id)
    }

    /// Compile the `[guard] exclude` globs, `None` if there are none
    pub fn exclude_set(&self) -> Result<Option<GlobSet>, ConfigError> {
        if self.guard.exclude.is_empty() {
            return Ok(None);
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in &self.guard.exclude {
            let glob = Glob::new(pattern.as_str()).map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid exclude glob pattern '{}': {}",
                    pattern.as_str(),
                    e
                ))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map(Some)
            .map_err(|e| ConfigError::Validation(format!("Failed to build GlobSet: {}", e)))
    }

    /// Apply the `[rules]` section to a catalog that is still being set up
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a rule id is not in the catalog.
    pub fn apply_to(&self, catalog: &mut RuleCatalog) -> Result<(), ConfigError> {
        if let Some(unknown) = self.rules.keys().find(|id| !catalog.contains(id)) {
            return Err(ConfigError::Validation(format!(
                "Unknown rule '{}' in [rules]",
                unknown
            )));
        }

        catalog
            .disable(self.disabled_rules())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Exemption settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Paths matching these globs are never inspected
    #[serde(default)]
    pub exclude: Vec<GlobPattern>,
}

/// Output configuration section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Color output setting
    #[serde(default)]
    pub color: ColorOption,
}

/// Output format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report on stderr
    #[default]
    Human,
    /// JSON Lines on stdout
    Jsonl,
}

/// Color output options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    /// Auto-detect based on terminal capabilities
    #[default]
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorOption> for termcolor::ColorChoice {
    fn from(option: ColorOption) -> Self {
        match option {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}
