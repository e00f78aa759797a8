#![forbid(unsafe_code)]

//! Inspection pipeline
//!
//! This module provides the Inspector which runs one request through every
//! stage: exemption, language classification, rule selection, matching per
//! rule class, and verdict aggregation. An Inspector holds no mutable state,
//! so one instance can serve any number of threads.

use crate::engine::matcher::match_rules;
use crate::engine::verdict::{ClassFindings, Verdict, aggregate};
use crate::hook::HookRequest;
use crate::rules::RuleCatalog;
use crate::types::Language;
use globset::GlobSet;
use serde::Serialize;
use std::sync::Arc;

/// Path suffixes that are never inspected
pub const EXEMPT_SUFFIXES: [&str; 7] = [".md", ".txt", ".json", ".yml", ".yaml", ".lock", ".sum"];

/// Everything learned from one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    /// Path the content is destined for
    pub file_path: String,

    /// Classified language, absent when the content was never inspected
    pub language: Option<Language>,

    /// Findings per rule class
    pub findings: ClassFindings,

    /// Final verdict
    pub verdict: Verdict,
}

impl Inspection {
    fn skipped(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            language: None,
            findings: ClassFindings::default(),
            verdict: Verdict::allow(),
        }
    }

    /// True if matching never ran for this request
    pub fn was_skipped(&self) -> bool {
        self.language.is_none()
    }
}

/// Runs requests against a shared, read-only rule catalog
#[derive(Debug, Clone)]
pub struct Inspector {
    catalog: Arc<RuleCatalog>,
    exclude: Option<GlobSet>,
}

impl Inspector {
    /// Creates an Inspector that owns its catalog
    pub fn new(catalog: RuleCatalog) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    /// Creates an Inspector over a catalog shared with other owners
    pub fn from_shared(catalog: Arc<RuleCatalog>) -> Self {
        Self {
            catalog,
            exclude: None,
        }
    }

    /// Also exempt paths matching these globs
    pub fn with_exclude(mut self, exclude: GlobSet) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Whether a path bypasses inspection entirely
    pub fn is_exempt(&self, file_path: &str) -> bool {
        if EXEMPT_SUFFIXES
            .iter()
            .any(|suffix| file_path.ends_with(suffix))
        {
            return true;
        }

        self.exclude
            .as_ref()
            .is_some_and(|exclude| exclude.is_match(file_path))
    }

    /// Handle one host request
    ///
    /// Operations other than `Write` and `Edit` are allowed without looking
    /// at their input.
    pub fn handle(&self, request: &HookRequest) -> Inspection {
        match request.operation().content() {
            Some((file_path, content)) => self.inspect(file_path, content),
            None => Inspection::skipped(request.file_path()),
        }
    }

    /// Inspect content destined for `file_path`
    pub fn inspect(&self, file_path: &str, content: &str) -> Inspection {
        if self.is_exempt(file_path) {
            return Inspection::skipped(file_path);
        }

        let language = Language::from_path(file_path);
        let selected = self.catalog.select(language);

        let findings = ClassFindings {
            incomplete: match_rules(content, selected.incomplete.iter().copied()),
            security: match_rules(content, selected.security.iter().copied()),
            quality: match_rules(content, selected.quality.iter().copied()),
            type_safety: match_rules(content, selected.type_safety.iter().copied()),
        };

        let verdict = aggregate(file_path, language, &findings);

        Inspection {
            file_path: file_path.to_string(),
            language: Some(language),
            findings,
            verdict,
        }
    }
}
