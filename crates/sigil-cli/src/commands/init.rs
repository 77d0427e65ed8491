//! `sigil init` — Write a default configuration file.

use std::path::Path;

use clap::Args;

use crate::config::SigilConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs, config_path: &Path) -> anyhow::Result<()> {
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "configuration file already exists at {}",
            config_path.display()
        );
    }

    SigilConfig::default().save(config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default config");
    println!("Initialized Sigil config at {}", config_path.display());
    println!("Set identity.signing_key_path to use 'sigil sign'.");
    Ok(())
}
