#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All finding records (by class, then line, then rule order)
//! 2. One verdict record

use crate::engine::{Decision, Inspection, Outcome};
use crate::rules::Finding;
use crate::types::{Language, RuleClass};
use serde::Serialize;

/// JSONL output formatter
///
/// Formats inspections as JSON Lines (one JSON object per line).
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format an inspection as JSONL
    pub fn format(&self, inspection: &Inspection) -> String {
        let mut output = String::new();

        let findings = &inspection.findings;
        let classes: [(RuleClass, &[Finding]); 4] = [
            (RuleClass::Security, &findings.security),
            (RuleClass::Incomplete, &findings.incomplete),
            (RuleClass::TypeSafety, &findings.type_safety),
            (RuleClass::Quality, &findings.quality),
        ];

        for (class, class_findings) in classes {
            for finding in class_findings {
                let record = FindingRecord {
                    record_type: "finding",
                    file: &inspection.file_path,
                    class,
                    rule: finding.rule_id.as_str(),
                    line: finding.line,
                    message: &finding.message,
                    content: &finding.content,
                };
                push_record(&mut output, &record);
            }
        }

        let verdict = VerdictRecord {
            record_type: "verdict",
            file: &inspection.file_path,
            language: inspection.language,
            outcome: inspection.verdict.outcome,
            decision: inspection.verdict.decision(),
            security: findings.security.len(),
            incomplete: findings.incomplete.len(),
            type_safety: findings.type_safety.len(),
            quality: findings.quality.len(),
            report: inspection.verdict.report.as_deref(),
        };
        push_record(&mut output, &verdict);

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record(output: &mut String, record: &impl Serialize) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

/// Finding record for JSONL output
#[derive(Debug, Serialize)]
struct FindingRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: &'a str,
    class: RuleClass,
    rule: &'a str,
    line: u32,
    message: &'a str,
    content: &'a str,
}

/// Verdict record for JSONL output
#[derive(Debug, Serialize)]
struct VerdictRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: &'a str,
    language: Option<Language>,
    outcome: Outcome,
    decision: Decision,
    security: usize,
    incomplete: usize,
    type_safety: usize,
    quality: usize,
    report: Option<&'a str>,
}
