//! Schemaforge CLI - extract an entity/relation model from SQL DDL

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{parse, types};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Parse(args) => parse::execute(args, &cli.global),
        cli::Commands::Types => types::execute(),
    }
}

/// `RUST_LOG` wins over the verbosity flag when set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
