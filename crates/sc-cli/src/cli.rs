//! CLI argument definitions using clap derive API

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default location of the compatibility matrix shipped with the tool.
pub const DEFAULT_CONFIG_PATH: &str = "config/compat_matrix.json";

/// shardcheck - compatibility assessment for PostgreSQL DDL scripts
#[derive(Parser, Debug)]
#[command(name = "shardcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess a SQL script against a target engine version
    Assess(AssessArgs),

    /// List engine versions configured in the compatibility matrix
    Versions(VersionsArgs),
}

/// Arguments for the assess command
#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Target engine version
    #[arg(short = 'e', long)]
    pub engine_version: String,

    /// SQL script to assess
    #[arg(short = 'i', long)]
    pub input_file: PathBuf,

    /// Directory to write the report into (must not exist yet)
    #[arg(short = 'o', long)]
    pub output_directory: PathBuf,

    /// Override the compatibility matrix path
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for the versions command
#[derive(Args, Debug)]
pub struct VersionsArgs {
    /// Override the compatibility matrix path
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
