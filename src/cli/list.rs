//! List command implementation
//!
//! This module implements the `precheck list` command, which:
//! - Lists every rule set in effect after the configuration is applied
//! - Optionally narrows the listing to the sets one language would run
//! - Supports both human-readable and JSONL output formats

use crate::cli::args::Options;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, Settings, build_catalog};
use crate::config::OutputFormat;
use crate::error::PrecheckError;
use crate::rules::{RuleCatalog, RuleSet};
use crate::types::{Language, RuleClass};
use serde::Serialize;
use std::fmt::Write;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 3: Error
pub fn run_list(language: Option<Language>, options: &Options) -> i32 {
    match run_list_inner(language, options) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_list_inner(language: Option<Language>, options: &Options) -> Result<String, PrecheckError> {
    let settings = Settings::resolve(options)?;
    let catalog = build_catalog(&settings.config)?;

    let sets = select_sets(&catalog, language);
    Ok(match settings.format {
        OutputFormat::Human => format_human(&sets),
        OutputFormat::Jsonl => format_jsonl(&sets),
    })
}

fn select_sets(catalog: &RuleCatalog, language: Option<Language>) -> Vec<&RuleSet> {
    let sets = match language {
        Some(language) => catalog.sets_for(language),
        None => catalog.iter_sets().collect(),
    };
    sets.into_iter().filter(|set| !set.is_empty()).collect()
}

fn format_human(sets: &[&RuleSet]) -> String {
    let mut output = String::new();

    if sets.iter().all(|set| set.is_empty()) {
        output.push_str("No rules are enabled.\n");
        return output;
    }

    let width = sets
        .iter()
        .flat_map(|set| set.iter())
        .map(|rule| rule.id().as_str().len())
        .max()
        .unwrap_or(0);

    for set in sets {
        let _ = writeln!(
            output,
            "{} ({}, {} rules)",
            set.name(),
            set.class(),
            set.len()
        );
        for rule in set.iter() {
            let _ = writeln!(
                output,
                "  {:width$}  {}",
                rule.id().as_str(),
                rule.message(),
                width = width
            );
        }
        output.push('\n');
    }

    output
}

fn format_jsonl(sets: &[&RuleSet]) -> String {
    let mut output = String::new();

    for set in sets {
        for rule in set.iter() {
            let record = RuleRecord {
                record_type: "rule",
                set: set.name(),
                class: set.class(),
                rule: rule.id().as_str(),
                pattern: rule.pattern(),
                message: rule.message(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }
    }

    output
}

/// Rule record for JSONL output
#[derive(Debug, Serialize)]
struct RuleRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    set: &'a str,
    class: RuleClass,
    rule: &'a str,
    pattern: &'a str,
    message: &'a str,
}
