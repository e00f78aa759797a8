#![forbid(unsafe_code)]

//! Rule catalog and per-language rule selection
//!
//! The RuleCatalog is responsible for:
//! - Compiling the built-in rule sets once at startup
//! - Rejecting duplicate rule ids
//! - Disabling rules named in configuration
//! - Resolving which rule sets apply to a language

use crate::error::RuleError;
use crate::rules::builtin;
use crate::rules::{RuleSet, SelectedRules};
use crate::types::{Language, RuleClass, RuleId};
use std::collections::HashSet;

/// Security and quality rules specific to one language family
#[derive(Debug, Clone)]
pub struct LanguageRules {
    pub security: RuleSet,
    pub quality: RuleSet,
}

/// Immutable registry of every rule set
///
/// Build it once, then share it by reference (or `Arc`) between invocations.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    incomplete: RuleSet,
    security: RuleSet,
    quality: RuleSet,
    type_safety: RuleSet,
    web: LanguageRules,
    python: LanguageRules,
    go: LanguageRules,
    rust: LanguageRules,
}

impl RuleCatalog {
    /// Compile the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if an embedded rule set is invalid or two rules
    /// share an id.
    pub fn builtin() -> Result<Self, RuleError> {
        let catalog = Self {
            incomplete: builtin::load(builtin::UNIVERSAL_INCOMPLETE)?,
            security: builtin::load(builtin::UNIVERSAL_SECURITY)?,
            quality: builtin::load(builtin::UNIVERSAL_QUALITY)?,
            type_safety: builtin::load(builtin::TYPE_SAFETY)?,
            web: LanguageRules {
                security: builtin::load(builtin::WEB_SECURITY)?,
                quality: builtin::load(builtin::WEB_QUALITY)?,
            },
            python: LanguageRules {
                security: builtin::load(builtin::PYTHON_SECURITY)?,
                quality: builtin::load(builtin::PYTHON_QUALITY)?,
            },
            go: LanguageRules {
                security: builtin::load(builtin::GO_SECURITY)?,
                quality: builtin::load(builtin::GO_QUALITY)?,
            },
            rust: LanguageRules {
                security: RuleSet::empty("rust-security", RuleClass::Security),
                quality: builtin::load(builtin::RUST_QUALITY)?,
            },
        };

        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    fn check_unique_ids(&self) -> Result<(), RuleError> {
        let mut seen = HashSet::new();
        for set in self.iter_sets() {
            for rule in set {
                if !seen.insert(rule.id()) {
                    return Err(RuleError::InvalidDefinition(format!(
                        "Duplicate rule ID '{}' in rule set {}",
                        rule.id(),
                        set.name()
                    )));
                }
            }
        }
        Ok(())
    }

    /// Language-specific rules, if the language has any
    pub fn language_rules(&self, language: Language) -> Option<&LanguageRules> {
        match language {
            Language::TypeScript | Language::JavaScript => Some(&self.web),
            Language::Python => Some(&self.python),
            Language::Go => Some(&self.go),
            Language::Rust => Some(&self.rust),
            Language::Java | Language::C | Language::Cpp | Language::Unknown => None,
        }
    }

    /// Rule sets that apply to a language, in evaluation order
    ///
    /// Within a class the universal set precedes the language-specific one.
    pub fn sets_for(&self, language: Language) -> Vec<&RuleSet> {
        let specific = self.language_rules(language);

        let mut sets = vec![&self.incomplete, &self.security];
        if let Some(rules) = specific {
            sets.push(&rules.security);
        }
        sets.push(&self.quality);
        if let Some(rules) = specific {
            sets.push(&rules.quality);
        }
        if language.is_optionally_typed() {
            sets.push(&self.type_safety);
        }
        sets
    }

    /// Resolve the rules to run for a language, grouped by class
    pub fn select(&self, language: Language) -> SelectedRules<'_> {
        let mut selected = SelectedRules::default();
        for set in self.sets_for(language) {
            selected.extend_from(set);
        }
        selected
    }

    /// Iterate over every rule set in the catalog
    pub fn iter_sets(&self) -> impl Iterator<Item = &RuleSet> {
        [
            &self.incomplete,
            &self.security,
            &self.web.security,
            &self.python.security,
            &self.go.security,
            &self.rust.security,
            &self.quality,
            &self.web.quality,
            &self.python.quality,
            &self.go.quality,
            &self.rust.quality,
            &self.type_safety,
        ]
        .into_iter()
    }

    /// Returns true if any rule set contains this id
    pub fn contains(&self, id: &RuleId) -> bool {
        self.iter_sets().any(|set| set.contains(id))
    }

    /// Total number of rules in the catalog
    pub fn len(&self) -> usize {
        self.iter_sets().map(RuleSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove the given rules from every set
    ///
    /// Intended for use while the catalog is being set up, before it is shared.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` for an id that no rule set contains.
    pub fn disable<'a>(
        &mut self,
        ids: impl IntoIterator<Item = &'a RuleId>,
    ) -> Result<(), RuleError> {
        let ids: HashSet<&RuleId> = ids.into_iter().collect();
        if let Some(unknown) = ids.iter().find(|id| !self.contains(id)) {
            return Err(RuleError::NotFound(unknown.to_string()));
        }

        for set in self.iter_sets_mut() {
            set.retain(|rule| !ids.contains(rule.id()));
        }
        Ok(())
    }

    fn iter_sets_mut(&mut self) -> impl Iterator<Item = &mut RuleSet> {
        [
            &mut self.incomplete,
            &mut self.security,
            &mut self.web.security,
            &mut self.python.security,
            &mut self.go.security,
            &mut self.rust.security,
            &mut self.quality,
            &mut self.web.quality,
            &mut self.python.quality,
            &mut self.go.quality,
            &mut self.rust.quality,
            &mut self.type_safety,
        ]
        .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sets: &[&RuleSet]) -> Vec<String> {
        sets.iter().map(|set| set.name().to_string()).collect()
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = RuleCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 96);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_sets_for_python() {
        let catalog = RuleCatalog::builtin().unwrap();
        assert_eq!(
            names(&catalog.sets_for(Language::Python)),
            vec![
                "universal-incomplete",
                "universal-security",
                "python-security",
                "universal-quality",
                "python-quality",
            ]
        );
    }

    #[test]
    fn test_sets_for_typescript_include_type_safety() {
        let catalog = RuleCatalog::builtin().unwrap();
        let sets = names(&catalog.sets_for(Language::TypeScript));
        assert_eq!(sets.last().map(String::as_str), Some("type-safety"));
        assert!(sets.contains(&"javascript-typescript-security".to_string()));
        assert_eq!(sets, names(&catalog.sets_for(Language::JavaScript)));
    }

    #[test]
    fn test_languages_without_specific_rules() {
        let catalog = RuleCatalog::builtin().unwrap();
        for language in [Language::Java, Language::C, Language::Cpp, Language::Unknown] {
            assert!(catalog.language_rules(language).is_none());
            assert_eq!(
                names(&catalog.sets_for(language)),
                vec![
                    "universal-incomplete",
                    "universal-security",
                    "universal-quality",
                ]
            );
        }
    }

    #[test]
    fn test_select_puts_universal_rules_first() {
        let catalog = RuleCatalog::builtin().unwrap();
        let selected = catalog.select(Language::Go);

        assert_eq!(selected.incomplete.len(), 14);
        assert_eq!(selected.security.len(), 13 + 4);
        assert_eq!(selected.quality.len(), 7 + 11);
        assert!(selected.type_safety.is_empty());

        assert_eq!(selected.security[0].id().as_str(), "sql-select-interpolation");
        assert_eq!(selected.security[13].id().as_str(), "exec-command-sh");
        assert_eq!(selected.quality[7].id().as_str(), "ignored-error");
    }

    #[test]
    fn test_select_rust_has_no_language_security() {
        let catalog = RuleCatalog::builtin().unwrap();
        let selected = catalog.select(Language::Rust);
        assert_eq!(selected.security.len(), 13);
        assert_eq!(selected.quality.len(), 7 + 15);
    }

    #[test]
    fn test_disable_rules() {
        let mut catalog = RuleCatalog::builtin().unwrap();
        let magic = RuleId::new("magic-number").unwrap();
        let unwrap = RuleId::new("unwrap").unwrap();

        catalog.disable([&magic, &unwrap]).unwrap();

        assert!(!catalog.contains(&magic));
        assert!(!catalog.contains(&unwrap));
        assert_eq!(catalog.len(), 94);
    }

    #[test]
    fn test_disable_unknown_rule() {
        let mut catalog = RuleCatalog::builtin().unwrap();
        let missing = RuleId::new("no-such-rule").unwrap();

        let result = catalog.disable([&missing]);
        assert!(matches!(result, Err(RuleError::NotFound(_))));
        assert_eq!(catalog.len(), 96);
    }
}
