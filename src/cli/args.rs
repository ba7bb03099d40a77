//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for diagnostics and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// What a single invocation does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate the catalog and emit the document for a profile
    Generate { profile: Option<String> },
    /// Validate the catalog only
    Check,
    /// List profiles and sources
    List,
}

/// eslintrc-gen CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "eslintrc-gen")]
#[command(about = "Generate an ESLint configuration from checked rule catalogs")]
#[command(version)]
pub struct Cli {
    /// Profile to generate
    pub profile: Option<String>,

    /// Validate the catalog without generating a document
    #[arg(long, conflicts_with_all = ["profile", "list"])]
    pub check: bool,

    /// List profiles and rule sources
    #[arg(long, conflicts_with = "profile")]
    pub list: bool,

    /// Catalog directory layered over the built-in catalog
    #[arg(long, env = "ESLINTRC_GEN_CATALOG", value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Diagnostics and listing format
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Diagnostics coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The command selected by the flags
    pub fn selected_command(&self) -> Command {
        if self.check {
            Command::Check
        } else if self.list {
            Command::List
        } else {
            Command::Generate {
                profile: self.profile.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        // Verify that the CLI struct is properly configured
        Cli::command().debug_assert();
    }

    #[test]
    fn test_command_factory_and_selected_command() {
        let command = Cli::command();
        assert_eq!(command.get_name(), "eslintrc-gen");
        assert!(command.get_arguments().any(|arg| arg.get_id() == "catalog"));

        let cli = Cli::try_parse_from(["eslintrc-gen", "--check"]).unwrap();
        assert_eq!(cli.selected_command(), Command::Check);
    }

    #[test]
    fn test_profile_positional() {
        let cli = Cli::parse_from(["eslintrc-gen", "svelte"]);
        assert_eq!(
            cli.selected_command(),
            Command::Generate {
                profile: Some("svelte".to_string())
            }
        );
        assert_eq!(cli.format, OutputFormat::Human);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_no_arguments_is_generate_without_profile() {
        let cli = Cli::parse_from(["eslintrc-gen"]);
        assert_eq!(cli.selected_command(), Command::Generate { profile: None });
    }

    #[test]
    fn test_check_flag() {
        let cli = Cli::parse_from(["eslintrc-gen", "--check"]);
        assert_eq!(cli.selected_command(), Command::Check);
    }

    #[test]
    fn test_list_flag() {
        let cli = Cli::parse_from(["eslintrc-gen", "--list", "-f", "jsonl"]);
        assert_eq!(cli.selected_command(), Command::List);
        assert_eq!(cli.format, OutputFormat::Jsonl);
    }

    #[test]
    fn test_check_conflicts_with_profile() {
        let result = Cli::try_parse_from(["eslintrc-gen", "--check", "svelte"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_conflicts_with_list() {
        let result = Cli::try_parse_from(["eslintrc-gen", "--check", "--list"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_conflicts_with_profile() {
        let result = Cli::try_parse_from(["eslintrc-gen", "--list", "svelte"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_dir() {
        let cli = Cli::parse_from(["eslintrc-gen", "--catalog", "rules", "svelte"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("rules")));
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::parse_from(["eslintrc-gen", "-vv", "svelte"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_color_choice() {
        let cli = Cli::parse_from(["eslintrc-gen", "--color", "never", "svelte"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(
            termcolor::ColorChoice::from(cli.color),
            termcolor::ColorChoice::Never
        );
    }

    #[test]
    fn test_invalid_format() {
        let result = Cli::try_parse_from(["eslintrc-gen", "--format", "xml", "svelte"]);
        assert!(result.is_err());
    }
}
