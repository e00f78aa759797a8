#![forbid(unsafe_code)]

//! Human-readable report output
//!
//! Reports go to stderr, which is what the host shows the operator. Only the
//! headline is colored.

use crate::engine::{Inspection, Outcome};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter
pub struct HumanFormatter {
    choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new(choice: ColorChoice) -> Self {
        Self { choice }
    }

    /// Print the report of an inspection to stderr
    ///
    /// Prints nothing for a silent allow.
    pub fn print(&self, inspection: &Inspection) -> io::Result<()> {
        let mut stderr = StandardStream::stderr(self.choice);
        self.write_to(&mut stderr, inspection)
    }

    /// Write the report of an inspection to any color-capable sink
    pub fn write_to(&self, out: &mut impl WriteColor, inspection: &Inspection) -> io::Result<()> {
        let Some(report) = inspection.verdict.report.as_deref() else {
            return Ok(());
        };

        let (headline, rest) = report.split_once('\n').unwrap_or((report, ""));

        if let Some(color) = headline_color(inspection.verdict.outcome) {
            out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        }
        write!(out, "{}", headline)?;
        out.reset()?;
        writeln!(out)?;
        write!(out, "{}", rest)?;
        out.flush()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

fn headline_color(outcome: Outcome) -> Option<Color> {
    match outcome {
        Outcome::Block => Some(Color::Red),
        Outcome::Warn => Some(Color::Yellow),
        Outcome::AllowWithInfo => Some(Color::Cyan),
        Outcome::Allow => None,
    }
}
