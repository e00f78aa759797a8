#![forbid(unsafe_code)]

//! Line-oriented pattern matching
//!
//! Text is split on `\n` only; every line is tested against every rule, in
//! registration order. Findings come out ordered by line, then by rule.

use crate::rules::{Finding, RegexRule};

/// Run a list of rules against a block of text
///
/// A rule contributes at most one finding per line, however many times it
/// occurs on that line.
pub fn match_rules<'r, I>(text: &str, rules: I) -> Vec<Finding>
where
    I: IntoIterator<Item = &'r RegexRule>,
{
    let rules: Vec<&RegexRule> = rules.into_iter().collect();
    if rules.is_empty() {
        return Vec::new();
    }

    let mut findings = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        for rule in &rules {
            if rule.matches_line(line) {
                findings.push(Finding {
                    line: (index + 1) as u32,
                    rule_id: rule.id().clone(),
                    message: rule.message().to_string(),
                    content: line.trim().to_string(),
                });
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, pattern: &str) -> RegexRule {
        RegexRule::new(id, pattern, format!("{} message", id), None).unwrap()
    }

    #[test]
    fn test_no_rules_no_findings() {
        let findings = match_rules("eval(x)", std::iter::empty::<&RegexRule>());
        assert!(findings.is_empty());
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let rules = [rule("todo", "TODO")];
        let findings = match_rules("first\nsecond\n// TODO: third", &rules);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 3);
        assert_eq!(findings[0].content, "// TODO: third");
        assert_eq!(findings[0].message, "todo message");
    }

    #[test]
    fn test_one_finding_per_rule_per_line() {
        let rules = [rule("todo", "TODO")];
        let findings = match_rules("TODO TODO TODO\nTODO", &rules);

        let lines: Vec<u32> = findings.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn test_multiple_rules_on_one_line_keep_registration_order() {
        let rules = [rule("second", "beta"), rule("first", "alpha")];
        let findings = match_rules("alpha beta", &rules);

        let ids: Vec<&str> = findings.iter().map(|f| f.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn test_line_order_is_primary() {
        let rules = [rule("a", "alpha"), rule("b", "beta")];
        let findings = match_rules("beta\nalpha\nalpha beta", &rules);

        let order: Vec<(u32, &str)> = findings
            .iter()
            .map(|f| (f.line, f.rule_id.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "b"), (2, "a"), (3, "a"), (3, "b")]);
    }

    #[test]
    fn test_content_is_trimmed() {
        let rules = [rule("todo", "TODO")];
        let findings = match_rules("    // TODO: indent\t\r", &rules);
        assert_eq!(findings[0].content, "// TODO: indent");
    }

    #[test]
    fn test_crlf_is_not_normalized() {
        let rules = [rule("end", "x$")];
        // The carriage return stays on the line, so an end anchor cannot see `x`
        assert!(match_rules("x\r\n", &rules).is_empty());
        assert_eq!(match_rules("x\n", &rules).len(), 1);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        let rules = [rule("empty", "^$")];
        let findings = match_rules("", &rules);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
    }

    #[test]
    fn test_matching_is_deterministic() {
        let rules = [rule("a", "a"), rule("b", "b")];
        let text = "ab\nba\nxyz\nbbb";
        assert_eq!(match_rules(text, &rules), match_rules(text, &rules));
    }
}
