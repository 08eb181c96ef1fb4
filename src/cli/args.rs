use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "todoparse")]
#[command(about = "Parse todo.txt lines and files into structured tasks")]
#[command(long_about = "todoparse - a todo.txt parser

Turns todo.txt entries into structured tasks: completion, priority,
creation and completion dates, +context and @project tags, optional
key:value metadata, and the remaining description.

QUICK START:
  todoparse parse \"(A) 2017-01-01 Call mom +family @phone\"
  todoparse read ~/todo.txt
  todoparse read ~/todo.txt --ext due -o json

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  todoparse <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Falls back to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "TODOPARSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a single todo.txt line
    ///
    /// # Examples
    ///
    ///   todoparse parse "x 2017-01-05 2017-01-01 Pay rent +home"
    ///   todoparse parse "(A) Call mom due:2017-02-01" --ext due
    ///   todoparse p "Buy milk @store" -o json
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Parse a whole todo.txt file
    ///
    /// Empty lines are skipped; the remaining lines are parsed in order.
    ///
    /// # Examples
    ///
    ///   todoparse read ~/todo.txt
    ///   todoparse read done.txt -o json | jq '.count'
    #[command(alias = "r")]
    Read(ReadArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   todoparse completions zsh > ~/.zsh/completions/_todoparse
    ///   source <(todoparse completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// The todo.txt line to parse
    pub line: String,

    /// Extract `KEY:value` pairs into extra fields (repeatable)
    #[arg(long = "ext", value_name = "KEY")]
    pub extensions: Vec<String>,
}

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Path to the todo.txt file
    pub file: PathBuf,

    /// Extract `KEY:value` pairs into extra fields (repeatable)
    #[arg(long = "ext", value_name = "KEY")]
    pub extensions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command_args() {
        let cli = Cli::try_parse_from(["todoparse", "parse", "(A) task", "--ext", "due", "-o", "json"])
            .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Commands::Parse(args) => {
                assert_eq!(args.line, "(A) task");
                assert_eq!(args.extensions, vec!["due"]);
            }
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_read_alias_and_verbosity() {
        let cli = Cli::try_parse_from(["todoparse", "-vv", "r", "todo.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.output.is_none());
        match cli.command {
            Commands::Read(args) => assert_eq!(args.file, PathBuf::from("todo.txt")),
            _ => panic!("expected read command"),
        }
    }
}
