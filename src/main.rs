//! Precheck CLI entry point

use clap::Parser;
use precheck::cli::{self, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    process::exit(cli::run(&cli));
}
