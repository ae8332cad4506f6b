//! Tunelift CLI - star-schema ETL for a music-streaming analytics warehouse

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;

use cli::Cli;
use commands::{compile, create_tables, etl, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::CreateTables => create_tables::execute(&cli.global).await,
        cli::Commands::Etl => etl::execute(&cli.global).await,
        cli::Commands::Run => run::execute(&cli.global).await,
        cli::Commands::Compile(args) => compile::execute(args, &cli.global).await,
    }
}
