//! CLI argument parsing and command dispatch

pub mod args;
pub mod check;
pub mod common;
pub mod generate;
pub mod list;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
pub use common::RunOptions;

/// Dispatch a parsed command line and return the process exit code
pub fn run(cli: &Cli) -> i32 {
    let options = RunOptions::from(cli);
    match cli.selected_command() {
        Command::Generate { profile } => generate::run_generate(profile.as_deref(), &options),
        Command::Check => check::run_check(&options),
        Command::List => list::run_list(&options),
    }
}
