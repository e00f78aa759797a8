//! Scan command implementation
//!
//! Inspects files on disk exactly as if each were being written. Files are
//! inspected in parallel; reports are printed in argument order.

use crate::cli::args::Options;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, Settings, build_inspector, emit};
use crate::engine::{Inspection, Inspector, Outcome};
use crate::error::PrecheckError;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Run the scan command
///
/// # Returns
///
/// The exit code of the most severe verdict, or 3 on a configuration error.
pub fn run_scan(paths: &[PathBuf], options: &Options) -> i32 {
    match run_scan_inner(paths, options) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_scan_inner(paths: &[PathBuf], options: &Options) -> Result<i32, PrecheckError> {
    let settings = Settings::resolve(options)?;
    let inspector = build_inspector(&settings.config)?;

    let inspections = scan_files(&inspector, paths);
    if inspections.is_empty() {
        eprintln!("Warning: No files could be read.");
        return Ok(EXIT_SUCCESS);
    }

    for inspection in &inspections {
        if let Err(e) = emit(&settings, inspection) {
            eprintln!("Warning: Failed to write report: {}", e);
        }
    }

    let worst = inspections
        .iter()
        .map(|inspection| inspection.verdict.outcome)
        .max()
        .unwrap_or(Outcome::Allow);

    Ok(worst.decision().exit_code())
}

/// Inspect every readable file, preserving the order of `paths`
///
/// Unreadable files are reported on stderr and skipped.
pub fn scan_files(inspector: &Inspector, paths: &[PathBuf]) -> Vec<Inspection> {
    paths
        .par_iter()
        .filter_map(|path| scan_file(inspector, path))
        .collect()
}

fn scan_file(inspector: &Inspector, path: &Path) -> Option<Inspection> {
    match fs::read_to_string(path) {
        Ok(content) => Some(inspector.inspect(&path.to_string_lossy(), &content)),
        Err(e) => {
            eprintln!("Warning: Failed to read file {}: {}", path.display(), e);
            None
        }
    }
}
