//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod hook;
pub mod list;
pub mod scan;

// Re-export types for convenient access
pub use args::{Cli, Command, Options};

/// Run a parsed command line, returning the process exit code
pub fn run(cli: &Cli) -> i32 {
    let options = cli.options();
    match cli.subcommand() {
        Command::Hook => hook::run_hook(std::io::stdin().lock(), &options),
        Command::Scan { paths } => scan::run_scan(&paths, &options),
        Command::List { language } => list::run_list(language, &options),
    }
}
