use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    list::{self, ListArgs},
    lookup::{self, LookupArgs},
    validate::{self, ValidateArgs},
    version::{self, VersionArgs},
};
use tracing::debug;

mod commands;
mod config;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "gemctl", about = "GEM seismic source type toolkit")]
struct Cli {
    /// TOML configuration file (defaults to ./gemctl.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter directive; overrides RUST_LOG and the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a label to its source type.
    Lookup(LookupArgs),
    /// Report whether each label names a source type.
    Check(CheckArgs),
    /// List all source types in declaration order.
    List(ListArgs),
    /// Validate the source type labels of a catalog file.
    Validate(ValidateArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    logging::init(cli.log_level.as_deref(), &config)?;
    debug!(?config, "configuration resolved");
    match cli.command {
        Command::Lookup(args) => lookup::run(&args, &config),
        Command::Check(args) => check::run(&args, &config),
        Command::List(args) => list::run(&args, &config),
        Command::Validate(args) => validate::run(&args, &config),
        Command::Version(args) => version::run(&args),
    }
}
