#![forbid(unsafe_code)]

//! Verdict aggregation
//!
//! Findings from every rule class are folded into a single outcome by an
//! ordered list of tiers. The first tier whose predicate holds decides the
//! outcome and formats the report; when none holds the content is allowed
//! silently.

use crate::rules::Finding;
use crate::types::Language;
use serde::Serialize;

/// Security findings listed in a Block report
pub const MAX_SECURITY_SHOWN: usize = 5;

/// Incomplete-implementation findings listed in a Warn report
pub const MAX_INCOMPLETE_SHOWN: usize = 3;

/// Quality plus type-safety findings tolerated before an informational note
pub const INFO_THRESHOLD: usize = 3;

const ANALYSIS_HINT: &str = "Run /quality-check for full analysis.";

/// Severity tier of a verdict, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Allow,
    AllowWithInfo,
    Warn,
    Block,
}

impl Outcome {
    /// The tri-state decision the host acts on
    pub fn decision(&self) -> Decision {
        match self {
            Outcome::Allow | Outcome::AllowWithInfo => Decision::Allow,
            Outcome::Warn => Decision::Warn,
            Outcome::Block => Decision::Block,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Allow => "allow",
            Outcome::AllowWithInfo => "allow-with-info",
            Outcome::Warn => "warn",
            Outcome::Block => "block",
        }
    }
}

/// What the host does with the guarded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Proceed, possibly with an informational note
    Allow,
    /// Proceed, but show the report to the operator
    Warn,
    /// Refuse the operation and show the report
    Block,
}

impl Decision {
    /// Exit status understood by the hook protocol
    ///
    /// - 0: allow
    /// - 1: warn, operation proceeds
    /// - 2: block
    pub fn exit_code(&self) -> i32 {
        match self {
            Decision::Allow => 0,
            Decision::Warn => 1,
            Decision::Block => 2,
        }
    }
}

/// Findings of one invocation, split by rule class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassFindings {
    pub incomplete: Vec<Finding>,
    pub security: Vec<Finding>,
    pub quality: Vec<Finding>,
    pub type_safety: Vec<Finding>,
}

impl ClassFindings {
    /// Total number of findings across all classes
    pub fn total(&self) -> usize {
        self.incomplete.len() + self.security.len() + self.quality.len() + self.type_safety.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Findings that are only ever reported as counts
    pub fn informational(&self) -> usize {
        self.quality.len() + self.type_safety.len()
    }
}

/// Result of one invocation: an outcome and, unless silent, a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub outcome: Outcome,
    pub report: Option<String>,
}

impl Verdict {
    /// A silent allow
    pub fn allow() -> Self {
        Self {
            outcome: Outcome::Allow,
            report: None,
        }
    }

    pub fn decision(&self) -> Decision {
        self.outcome.decision()
    }

    /// First line of the report, if any
    pub fn headline(&self) -> Option<&str> {
        self.report.as_deref().and_then(|report| report.lines().next())
    }
}

struct ReportContext<'a> {
    file_path: &'a str,
    language: Language,
    findings: &'a ClassFindings,
}

struct Tier {
    outcome: Outcome,
    applies: fn(&ClassFindings) -> bool,
    report: fn(&ReportContext<'_>) -> Vec<String>,
}

/// Tiers in precedence order; the first that applies wins
const TIERS: [Tier; 3] = [
    Tier {
        outcome: Outcome::Block,
        applies: has_security,
        report: block_report,
    },
    Tier {
        outcome: Outcome::Warn,
        applies: has_incomplete,
        report: warn_report,
    },
    Tier {
        outcome: Outcome::AllowWithInfo,
        applies: exceeds_info_threshold,
        report: info_report,
    },
];

/// Fold the findings of all rule classes into a verdict
pub fn aggregate(file_path: &str, language: Language, findings: &ClassFindings) -> Verdict {
    let ctx = ReportContext {
        file_path,
        language,
        findings,
    };

    TIERS
        .iter()
        .find(|tier| (tier.applies)(findings))
        .map_or_else(Verdict::allow, |tier| {
            let mut report = (tier.report)(&ctx).join("\n");
            report.push('\n');
            Verdict {
                outcome: tier.outcome,
                report: Some(report),
            }
        })
}

fn has_security(findings: &ClassFindings) -> bool {
    !findings.security.is_empty()
}

fn has_incomplete(findings: &ClassFindings) -> bool {
    !findings.incomplete.is_empty()
}

fn exceeds_info_threshold(findings: &ClassFindings) -> bool {
    findings.informational() > INFO_THRESHOLD
}

fn block_report(ctx: &ReportContext<'_>) -> Vec<String> {
    let security = &ctx.findings.security;
    let mut lines = vec![
        "❌ BLOCKED: Security issues detected".to_string(),
        String::new(),
        format!("File: {}", ctx.file_path),
        format!("Language: {}", ctx.language),
    ];

    for finding in security.iter().take(MAX_SECURITY_SHOWN) {
        lines.push(String::new());
        push_finding(&mut lines, finding);
    }
    if security.len() > MAX_SECURITY_SHOWN {
        lines.push(String::new());
        lines.push(format!(
            "  ... and {} more security issues",
            security.len() - MAX_SECURITY_SHOWN
        ));
    }

    lines.push(String::new());
    lines.push("⚠️  CRITICAL: Fix security issues before proceeding.".to_string());
    lines.push(ANALYSIS_HINT.to_string());
    lines
}

fn warn_report(ctx: &ReportContext<'_>) -> Vec<String> {
    let incomplete = &ctx.findings.incomplete;
    let mut lines = vec![
        "⚠️  WARNING: Incomplete implementation detected".to_string(),
        String::new(),
        format!("File: {}", ctx.file_path),
    ];

    for finding in incomplete.iter().take(MAX_INCOMPLETE_SHOWN) {
        push_finding(&mut lines, finding);
    }
    if incomplete.len() > MAX_INCOMPLETE_SHOWN {
        lines.push(format!(
            "  ... and {} more issues",
            incomplete.len() - MAX_INCOMPLETE_SHOWN
        ));
    }

    lines.push(String::new());
    lines.push("Complete implementation before committing.".to_string());
    lines.push(ANALYSIS_HINT.to_string());
    lines
}

fn info_report(ctx: &ReportContext<'_>) -> Vec<String> {
    let findings = ctx.findings;
    let mut lines = vec![format!(
        "ℹ️  Info: {} code quality concerns in {}",
        findings.informational(),
        ctx.file_path
    )];

    if ctx.language.is_optionally_typed() && !findings.type_safety.is_empty() {
        lines.push(format!(
            "  - {} type safety issues",
            findings.type_safety.len()
        ));
    }
    if !findings.quality.is_empty() {
        lines.push(format!("  - {} code quality issues", findings.quality.len()));
    }

    lines.push("Run /quality-check for details.".to_string());
    lines
}

fn push_finding(lines: &mut Vec<String>, finding: &Finding) {
    lines.push(format!("  Line {}: {}", finding.line, finding.message));
    lines.push(format!("    > {}", finding.content));
}
