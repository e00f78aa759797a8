#![forbid(unsafe_code)]

//! Rule sets, findings, and the per-class selection handed to the matcher

use crate::rules::RegexRule;
use crate::types::{RuleClass, RuleId};
use serde::Serialize;

/// An ordered collection of rules sharing a class and scope
///
/// Order only affects how findings on the same line are listed.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    class: RuleClass,
    rules: Vec<RegexRule>,
}

impl RuleSet {
    /// Creates a rule set from already-compiled rules
    pub fn new(name: impl Into<String>, class: RuleClass, rules: Vec<RegexRule>) -> Self {
        Self {
            name: name.into(),
            class,
            rules,
        }
    }

    /// Creates a rule set with no rules
    pub fn empty(name: impl Into<String>, class: RuleClass) -> Self {
        Self::new(name, class, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> RuleClass {
        self.class
    }

    /// Iterate over the rules in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, RegexRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if a rule with this id is in the set
    pub fn contains(&self, id: &RuleId) -> bool {
        self.rules.iter().any(|rule| rule.id() == id)
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&RegexRule) -> bool) {
        self.rules.retain(keep);
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RegexRule;
    type IntoIter = std::slice::Iter<'a, RegexRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// One rule matching one line of input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Line number (1-indexed)
    pub line: u32,

    /// Rule that matched
    pub rule_id: RuleId,

    /// Message of the matched rule
    pub message: String,

    /// The matched line with surrounding whitespace trimmed
    pub content: String,
}

/// Rules to run for one language, grouped by class
///
/// Within each class, universal rules come before language-specific ones.
#[derive(Debug, Default)]
pub struct SelectedRules<'a> {
    pub incomplete: Vec<&'a RegexRule>,
    pub security: Vec<&'a RegexRule>,
    pub quality: Vec<&'a RegexRule>,
    pub type_safety: Vec<&'a RegexRule>,
}

impl<'a> SelectedRules<'a> {
    /// Append every rule of a set to the list for its class
    pub fn extend_from(&mut self, set: &'a RuleSet) {
        let target = match set.class() {
            RuleClass::Incomplete => &mut self.incomplete,
            RuleClass::Security => &mut self.security,
            RuleClass::Quality => &mut self.quality,
            RuleClass::TypeSafety => &mut self.type_safety,
        };
        target.extend(set.iter());
    }

    /// Total number of rules selected across all classes
    pub fn len(&self) -> usize {
        self.incomplete.len() + self.security.len() + self.quality.len() + self.type_safety.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
