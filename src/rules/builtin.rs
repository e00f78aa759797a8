#![forbid(unsafe_code)]

//! Built-in rule sets embedded at compile time
//!
//! This module provides access to built-in rule sets that are compiled into the binary
//! using `include_str!`. This ensures the binary is self-contained and can run
//! without external rule files.

use crate::error::RuleError;
use crate::rules::{RuleSet, parse_rule_set};
use crate::types::RuleClass;

/// An embedded rule set document: (name, class, TOML source)
pub(crate) type EmbeddedSet = (&'static str, RuleClass, &'static str);

pub(crate) const UNIVERSAL_INCOMPLETE: EmbeddedSet = (
    "universal-incomplete",
    RuleClass::Incomplete,
    include_str!("../../builtin-rules/common/incomplete.toml"),
);

pub(crate) const UNIVERSAL_SECURITY: EmbeddedSet = (
    "universal-security",
    RuleClass::Security,
    include_str!("../../builtin-rules/common/security.toml"),
);

pub(crate) const UNIVERSAL_QUALITY: EmbeddedSet = (
    "universal-quality",
    RuleClass::Quality,
    include_str!("../../builtin-rules/common/quality.toml"),
);

pub(crate) const TYPE_SAFETY: EmbeddedSet = (
    "type-safety",
    RuleClass::TypeSafety,
    include_str!("../../builtin-rules/web/type-safety.toml"),
);

pub(crate) const WEB_SECURITY: EmbeddedSet = (
    "javascript-typescript-security",
    RuleClass::Security,
    include_str!("../../builtin-rules/web/security.toml"),
);

pub(crate) const WEB_QUALITY: EmbeddedSet = (
    "javascript-typescript-quality",
    RuleClass::Quality,
    include_str!("../../builtin-rules/web/quality.toml"),
);

pub(crate) const PYTHON_SECURITY: EmbeddedSet = (
    "python-security",
    RuleClass::Security,
    include_str!("../../builtin-rules/python/security.toml"),
);

pub(crate) const PYTHON_QUALITY: EmbeddedSet = (
    "python-quality",
    RuleClass::Quality,
    include_str!("../../builtin-rules/python/quality.toml"),
);

pub(crate) const GO_SECURITY: EmbeddedSet = (
    "go-security",
    RuleClass::Security,
    include_str!("../../builtin-rules/go/security.toml"),
);

pub(crate) const GO_QUALITY: EmbeddedSet = (
    "go-quality",
    RuleClass::Quality,
    include_str!("../../builtin-rules/go/quality.toml"),
);

pub(crate) const RUST_QUALITY: EmbeddedSet = (
    "rust-quality",
    RuleClass::Quality,
    include_str!("../../builtin-rules/rust/quality.toml"),
);

/// Compile one embedded rule set
pub(crate) fn load(set: EmbeddedSet) -> Result<RuleSet, RuleError> {
    let (name, class, content) = set;
    parse_rule_set(name, class, content)
}
