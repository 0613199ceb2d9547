//! shardcheck CLI - assess PostgreSQL DDL scripts against a
//! distributed-engine compatibility matrix

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod report;

use cli::Cli;
use commands::{assess, versions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Assess(args) => assess::execute(args),
        cli::Commands::Versions(args) => versions::execute(args),
    }
}
