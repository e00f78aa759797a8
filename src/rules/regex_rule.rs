#![forbid(unsafe_code)]

//! Regex-based rule implementation
//!
//! This module provides RegexRule, which classifies a single line of text,
//! and the TOML format rule sets are written in.

use crate::error::RuleError;
use crate::rules::RuleSet;
use crate::types::{RuleClass, RuleId};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// TOML structure for a rule set document
///
/// Each embedded file under builtin-rules/ is one of these.
#[derive(Debug, Deserialize)]
struct RuleSetDefinition {
    #[serde(default)]
    rule: Vec<RuleDefinition>,
}

#[derive(Debug, Deserialize)]
struct RuleDefinition {
    id: String,
    pattern: String,
    message: String,
    #[serde(default)]
    unless: Option<String>,
}

/// A rule that classifies lines of text using regular expressions
///
/// Both expressions are compiled case-insensitively. A line matches when the
/// pattern is found somewhere in it and, if `unless` is set, the text that
/// follows that occurrence does not match `unless`.
#[derive(Clone)]
pub struct RegexRule {
    id: RuleId,
    message: String,
    pattern: Regex,
    unless: Option<Regex>,
}

impl std::fmt::Debug for RegexRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegexRule")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("pattern", &self.pattern.as_str())
            .field("unless", &self.unless.as_ref().map(Regex::as_str))
            .finish()
    }
}

impl RegexRule {
    /// Build a rule from its parts
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` for an invalid id and
    /// `RuleError::InvalidRegex` if either expression fails to compile.
    pub fn new(
        id: &str,
        pattern: &str,
        message: impl Into<String>,
        unless: Option<&str>,
    ) -> Result<Self, RuleError> {
        let rule_id = RuleId::new(id)
            .ok_or_else(|| RuleError::InvalidDefinition(format!("Invalid rule ID: {}", id)))?;

        let pattern = compile(pattern)?;
        let unless = unless.map(compile).transpose()?;

        Ok(RegexRule {
            id: rule_id,
            message: message.into(),
            pattern,
            unless,
        })
    }

    /// Returns the rule's identifier
    pub fn id(&self) -> &RuleId {
        &self.id
    }

    /// Returns the diagnostic message reported for a match
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source of the main pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check whether this rule fires on a single line
    ///
    /// Matching is existential: one qualifying occurrence is enough.
    pub fn matches_line(&self, line: &str) -> bool {
        let Some(ref unless) = self.unless else {
            return self.pattern.is_match(line);
        };

        let mut start = 0;
        while let Some(found) = self.pattern.find_at(line, start) {
            if !unless.is_match(&line[found.end()..]) {
                return true;
            }

            // Rejected: try again from the next character after this occurrence began
            let step = line[found.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            start = found.start() + step;
            if start > line.len() {
                break;
            }
        }

        false
    }
}

fn compile(source: &str) -> Result<Regex, RuleError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            RuleError::InvalidRegex(format!("Failed to compile pattern '{}': {}", source, e))
        })
}

/// Parse a rule set from TOML content
///
/// # Errors
///
/// Returns `RuleError::InvalidDefinition` if the TOML is malformed, a field is
/// missing, or an id is invalid, and `RuleError::InvalidRegex` if a pattern
/// does not compile.
pub fn parse_rule_set(name: &str, class: RuleClass, content: &str) -> Result<RuleSet, RuleError> {
    let def: RuleSetDefinition = toml::from_str(content).map_err(|e| {
        RuleError::InvalidDefinition(format!("Failed to parse rule set '{}': {}", name, e))
    })?;

    let rules = def
        .rule
        .into_iter()
        .map(|rule| RegexRule::new(&rule.id, &rule.pattern, rule.message, rule.unless.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RuleSet::new(name, class, rules))
}
