mod cases;
mod check;
mod completions;
mod convert;
mod words;

use std::{io::BufRead, path::PathBuf};

use cases::CasesCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::{Result, WrapErr};
use words::WordsCommand;

use crate::config::Config;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "recase")]
#[command(version)]
#[command(about = "Convert text between camelCase, PascalCase, kebab-case and dot.case")]
pub(crate) struct Cli {
    /// Path to recase.toml (defaults to ./recase.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let config = Config::discover(self.config.as_deref(), &cwd).unwrap_or_exit();

        match &self.command {
            Commands::Convert(cmd) => cmd.run(&config),
            Commands::Check(cmd) => cmd.run(&config),
            Commands::Words(cmd) => cmd.run(),
            Commands::Cases(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert text to a case
    Convert(ConvertCommand),

    /// Check that text is already in a case
    Check(CheckCommand),

    /// Show how text is split into words
    Words(WordsCommand),

    /// List supported cases
    Cases(CasesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Use positional inputs, or read one input per stdin line when there are none.
fn read_inputs(args: &[String]) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    tracing::debug!("no inputs given, reading stdin");
    read_lines(std::io::stdin().lock())
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .wrap_err("Failed to read input lines")
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["recase", "convert", "-c", "camelCase", "a b", "c d"]).unwrap();
        match cli.command {
            Commands::Convert(cmd) => {
                assert_eq!(cmd.case, Some(recase_core::Case::Camel));
                assert_eq!(cmd.inputs, ["a b", "c d"]);
                assert!(!cmd.json);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_unknown_case() {
        assert!(Cli::try_parse_from(["recase", "convert", "--case", "snake", "x"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["recase", "cases", "--config", "other.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("other.toml")));
    }

    #[test]
    fn test_read_inputs_prefers_args() {
        let args = vec!["x".to_string()];
        assert_eq!(read_inputs(&args).unwrap(), ["x"]);
    }

    #[test]
    fn test_read_lines() {
        let lines = read_lines("hello world\nfoo_bar\n\n".as_bytes()).unwrap();
        assert_eq!(lines, ["hello world", "foo_bar", ""]);
    }
}
