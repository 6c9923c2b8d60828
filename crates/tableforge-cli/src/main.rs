//! TableForge CLI
//!
//! Usage: `tableforge [--config FILE] <seating|dishes|order [N]>`
//!
//! `seating` and `dishes` read their puzzle from stdin.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tableforge_cli::{run_dishes, run_order, run_seating, CliError};
use tableforge_config::{TableConfig, DEFAULT_CONFIG_FILE};
use tracing::{debug, error};

#[derive(Parser, Debug)]
#[command(name = "tableforge", version)]
#[command(about = "Seating arrangements and serving orders from plain-text constraints")]
struct Args {
    /// Configuration file (TOML, or YAML by extension)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reads the seating preferences from stdin and outputs the seating arrangement
    Seating,

    /// Reads the order constraints for the dishes from stdin and outputs the dishes order
    Dishes,

    /// Displays up to N permutations of the configured guests
    Order {
        /// Number of permutations to display
        count: Option<usize>,
    },
}

fn main() -> ExitCode {
    tableforge_console::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args.config)?;
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::Seating => run_seating(&io::read_to_string(io::stdin())?, &config, &mut stdout)?,
        Command::Dishes => run_dishes(&io::read_to_string(io::stdin())?, &config, &mut stdout)?,
        Command::Order { count } => run_order(&config, count, &mut stdout)?,
    }

    stdout.flush()?;
    Ok(())
}

fn load_config(path: &Path) -> Result<TableConfig, CliError> {
    if !path.exists() {
        debug!(path = %path.display(), "no configuration file, using defaults");
        return Ok(TableConfig::default());
    }
    Ok(TableConfig::load(path)?)
}
