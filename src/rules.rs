#![forbid(unsafe_code)]

//! Rule definitions, the built-in catalog, and rule selection

mod builtin;
mod catalog;
mod regex_rule;
mod rule;

// Re-export core types
pub use catalog::{LanguageRules, RuleCatalog};
pub use regex_rule::{RegexRule, parse_rule_set};
pub use rule::{Finding, RuleSet, SelectedRules};
