#![forbid(unsafe_code)]

//! Precheck: content inspection for proposed file writes
//!
//! Precheck classifies the text of a file write or edit against a catalog of
//! security, completeness, and quality rules, and returns a verdict the host
//! uses to allow, warn about, or block the operation.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, HookError, PrecheckError, RuleError};

// Re-export core domain types for convenient access
pub use engine::{Decision, Inspection, Inspector, Outcome, Verdict};
pub use hook::{HookRequest, Operation};
pub use rules::RuleCatalog;
pub use types::{GlobPattern, Language, RuleClass, RuleId};
