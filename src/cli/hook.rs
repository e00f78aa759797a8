//! Hook command implementation
//!
//! This module implements `precheck hook`, the command the host runs before
//! every file operation. It:
//! - Reads one JSON request from stdin
//! - Inspects the content of `Write` and `Edit` operations
//! - Prints the report and exits with the decision's code

use crate::cli::args::Options;
use crate::cli::common::{EXIT_ERROR, Settings, build_inspector, emit};
use crate::error::PrecheckError;
use crate::hook::HookRequest;
use std::io::Read;

/// Run the hook command against a request source
///
/// # Returns
///
/// Exit code:
/// - 0: Allow
/// - 1: Warn
/// - 2: Block
/// - 3: Malformed input or invalid configuration; the operation proceeds
pub fn run_hook(input: impl Read, options: &Options) -> i32 {
    match run_hook_inner(input, options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_hook_inner(input: impl Read, options: &Options) -> Result<i32, PrecheckError> {
    let settings = Settings::resolve(options)?;
    let inspector = build_inspector(&settings.config)?;

    let request = HookRequest::from_reader(input)?;
    let inspection = inspector.handle(&request);

    if let Err(e) = emit(&settings, &inspection) {
        eprintln!("Warning: Failed to write report: {}", e);
    }

    Ok(inspection.verdict.decision().exit_code())
}
