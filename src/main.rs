use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use todoparse::cli::args::{Cli, Commands};
use todoparse::cli::commands;
use todoparse::config::Config;
use todoparse::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.general.color.apply();
    logging::init(logging::level_for_verbosity(cli.verbose, &config.logging.level));

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => {
            commands::parse_line(&config, &args, format).context("failed to parse line")?
        }
        Commands::Read(args) => commands::read_file(&config, &args, format)
            .with_context(|| format!("failed to read {}", args.file.display()))?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
