//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Schemaforge - turn CREATE TABLE scripts into an entity/relation model
#[derive(Parser, Debug)]
#[command(name = "sf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Parser config file (default: ./schemaforge.yml if present)
    #[arg(short, long, global = true, env = "SCHEMAFORGE_CONFIG")]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a DDL script and print the entity/relation model
    Parse(ParseArgs),

    /// List the built-in SQL type mappings
    Types,
}

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// SQL file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub output: ParseOutput,
}

/// Parse output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutput {
    /// Pretty-printed JSON model
    Json,
    /// Human-readable summary
    Pretty,
    /// Entity names only
    Names,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
