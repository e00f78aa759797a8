//! Test utilities for precheck integration tests

#![allow(dead_code)]

use precheck::{Inspection, Inspector, RuleCatalog};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Inspector over the unmodified built-in catalog
pub fn builtin_inspector() -> Inspector {
    Inspector::new(assert_ok!(RuleCatalog::builtin(), "built-in catalog must load"))
}

/// Inspect content with the built-in catalog
pub fn inspect(file_path: &str, content: &str) -> Inspection {
    builtin_inspector().inspect(file_path, content)
}

/// Ids of the rules behind a list of findings, in order
pub fn rule_ids(findings: &[precheck::rules::Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.rule_id.as_str()).collect()
}
