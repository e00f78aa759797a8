//! Common helper functions shared across CLI commands
//!
//! This module provides shared functionality for loading configuration,
//! building the inspector and printing inspections.

use crate::cli::args::Options;
use crate::config::{CONFIG_FILE, ColorOption, Config, OutputFormat};
use crate::engine::{Inspection, Inspector};
use crate::error::{ConfigError, PrecheckError};
use crate::output::{HumanFormatter, JsonlFormatter};
use crate::rules::RuleCatalog;
use std::io::{self, Write};

/// Exit codes
///
/// The host treats 2 as "block", so 3 is reserved for failures of the tool
/// itself and never stops the operation.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_WARN: i32 = 1;
pub const EXIT_BLOCK: i32 = 2;
pub const EXIT_ERROR: i32 = 3;

/// Configuration and flags merged into the settings a command runs with
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub config: Config,
    pub format: OutputFormat,
    pub color: ColorOption,
    pub verbose: bool,
}

impl Settings {
    /// Load the configuration and let command-line flags override it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if an explicit `--config` file cannot be read.
    /// Returns `ConfigError::Parse` or `ConfigError::Validation` if the file
    /// is invalid.
    pub fn resolve(options: &Options) -> Result<Self, ConfigError> {
        let config = match &options.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(CONFIG_FILE)?,
        };

        Ok(Self {
            format: options.format.unwrap_or(config.output.format),
            color: options.color.unwrap_or(config.output.color),
            verbose: options.verbose,
            config,
        })
    }
}

/// Build the catalog with the `[rules]` section applied
///
/// # Errors
///
/// Returns `PrecheckError::Rule` if a built-in rule fails to load, and
/// `PrecheckError::Config` if the configuration names an unknown rule.
pub(crate) fn build_catalog(config: &Config) -> Result<RuleCatalog, PrecheckError> {
    let mut catalog = RuleCatalog::builtin()?;
    config.apply_to(&mut catalog)?;
    Ok(catalog)
}

/// Build an inspector from the configuration
///
/// # Errors
///
/// Same as [`build_catalog`], plus `PrecheckError::Config` for exclude globs
/// that do not compile.
pub(crate) fn build_inspector(config: &Config) -> Result<Inspector, PrecheckError> {
    let inspector = Inspector::new(build_catalog(config)?);
    Ok(match config.exclude_set()? {
        Some(exclude) => inspector.with_exclude(exclude),
        None => inspector,
    })
}

/// Print one inspection in the configured format
///
/// Human reports go to stderr, JSONL records to stdout.
pub(crate) fn emit(settings: &Settings, inspection: &Inspection) -> io::Result<()> {
    if settings.verbose {
        log_inspection(inspection);
    }

    match settings.format {
        OutputFormat::Human => HumanFormatter::new(settings.color.into()).print(inspection),
        OutputFormat::Jsonl => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(JsonlFormatter::new().format(inspection).as_bytes())?;
            stdout.flush()
        }
    }
}

fn log_inspection(inspection: &Inspection) {
    let Some(language) = inspection.language else {
        eprintln!("Skipped {}", inspection.file_path);
        return;
    };

    let findings = &inspection.findings;
    eprintln!(
        "Inspected {} as {}: {} security, {} incomplete, {} type safety, {} quality -> {}",
        inspection.file_path,
        language,
        findings.security.len(),
        findings.incomplete.len(),
        findings.type_safety.len(),
        findings.quality.len(),
        inspection.verdict.outcome.as_str(),
    );
}
