//! `sigil sign` — Sign a message with the configured identity key.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use sigil_identity::{DidKeyResolver, KeyManager, TracingSink};

use crate::config::{read_key_file, SigilConfig};

#[derive(Args, Debug)]
pub struct SignArgs {
    /// Message to sign (UTF-8).
    #[arg(short, long)]
    pub message: String,

    /// Key file to use instead of identity.signing_key_path.
    #[arg(short, long)]
    pub key_file: Option<PathBuf>,
}

pub fn run(args: &SignArgs, config: &SigilConfig) -> anyhow::Result<()> {
    let key = match &args.key_file {
        Some(path) => read_key_file(path, config.identity.curve)?,
        None => config.identity.load_signing_key()?.ok_or_else(|| {
            anyhow::anyhow!("no signing key: pass --key-file or set identity.signing_key_path")
        })?,
    };

    let resolver = Arc::new(DidKeyResolver::new(&config.key_manager.signing_key_id));
    let manager = KeyManager::new(resolver, config.key_manager.clone())
        .with_signing_key(key)
        .with_event_sink(Arc::new(TracingSink));

    let did = manager
        .signing_did()
        .ok_or_else(|| anyhow::anyhow!("key manager has no signing key"))?;
    let signature = manager.sign_for_user(&did, args.message.as_bytes())?;

    println!("Signer:    {}", did);
    println!("Signature: {}", signature.to_hex());
    Ok(())
}
