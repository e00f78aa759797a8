//! Error types for Precheck
//!
//! This module defines the error types used throughout Precheck, following
//! a hierarchical structure with specific error variants for different
//! error categories.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
///
/// These can only surface while the catalog is being built; matching itself
/// never fails.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),

    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// Invalid regex pattern
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

/// Errors reading the request delivered by the host
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    /// The payload could not be read
    #[error("Failed to read hook input: {0}")]
    Read(#[from] std::io::Error),

    /// The payload is not valid UTF-8
    #[error("Invalid input encoding: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    /// The payload is not a well-formed hook request
    #[error("Invalid JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

impl HookError {
    /// True when the payload itself is unusable, as opposed to an I/O failure
    pub fn is_malformed(&self) -> bool {
        matches!(self, HookError::InvalidEncoding(_) | HookError::MalformedInput(_))
    }
}

/// Top-level error type for Precheck
#[derive(Debug, thiserror::Error)]
pub enum PrecheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Hook input error
    #[error(transparent)]
    Hook(#[from] HookError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
