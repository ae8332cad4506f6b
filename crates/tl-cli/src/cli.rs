//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Tunelift - star-schema ETL for a music-streaming analytics warehouse
#[derive(Parser, Debug)]
#[command(name = "tl")]
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
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop and recreate the warehouse star schema
    CreateTables,

    /// Load staging tables, then populate the fact and dimension tables
    Etl,

    /// Full pipeline: reset schema, load staging, run transforms
    Run,

    /// Render the catalog SQL to files without executing it
    Compile(CompileArgs),
}

/// Arguments for the compile command
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Override output directory (default: <target_path>/compiled)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Override SQL dialect (duckdb or redshift)
    #[arg(short, long)]
    pub dialect: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
