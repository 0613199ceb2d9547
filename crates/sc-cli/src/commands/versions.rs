//! `shardcheck versions` - list configured engine versions.

use anyhow::{Context, Result};

use sc_core::CompatConfig;

use crate::cli::VersionsArgs;

pub fn execute(args: &VersionsArgs) -> Result<()> {
    let config = CompatConfig::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;
    for version in config.versions() {
        println!("{version}");
    }
    Ok(())
}
