//! CLI argument parsing using clap

use crate::config::{ColorOption, OutputFormat};
use crate::types::Language;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Precheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "precheck")]
#[command(about = "Inspect proposed file writes for security issues and incomplete code")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to `hook`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file (defaults to ./precheck.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the configuration file
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output coloring, overriding the configuration file
    #[arg(long, global = true)]
    pub color: Option<ColorOption>,

    /// Print diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// The subcommand to run, `hook` when none was given
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Hook)
    }

    /// Options shared by every subcommand
    pub fn options(&self) -> Options {
        Options {
            config: self.config.clone(),
            format: self.format,
            color: self.color,
            verbose: self.verbose,
        }
    }
}

/// Available precheck subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Inspect one hook request read from stdin
    Hook,

    /// Inspect files on disk as if they were being written
    Scan {
        /// Files to inspect
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List the rules in effect
    List {
        /// Only list rule sets that apply to this language
        #[arg(short, long)]
        language: Option<Language>,
    },
}

/// Global flags, resolved against the configuration file by each command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: Option<ColorOption>,
    pub verbose: bool,
}
