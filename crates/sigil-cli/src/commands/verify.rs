//! `sigil verify` — Verify a signature attributed to a DID.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use sigil_crypto::Signature;
use sigil_identity::{
    CompositeDidResolver, DidDocument, DidKeyResolver, KeyManager, LocalDidResolver, TracingSink,
};

use crate::config::SigilConfig;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// DID the signature is attributed to.
    pub did: String,

    /// Signed message (UTF-8).
    #[arg(short, long)]
    pub message: String,

    /// Hex-encoded 64-byte signature.
    #[arg(short, long)]
    pub signature: String,

    /// JSON file holding an array of DID documents to resolve against.
    #[arg(short, long)]
    pub documents: Option<PathBuf>,
}

pub async fn run(args: &VerifyArgs, config: &SigilConfig) -> anyhow::Result<()> {
    let signature = Signature::from_hex(&args.signature)?;

    let resolver = build_resolver(config, args.documents.as_deref())?;
    let manager = KeyManager::new(Arc::new(resolver), config.key_manager.clone())
        .with_event_sink(Arc::new(TracingSink));

    match manager
        .verify_user_signature(&args.did, args.message.as_bytes(), signature.as_bytes())
        .await
    {
        Ok(()) => {
            println!("Signature is valid for {}", args.did);
            Ok(())
        }
        Err(e) => anyhow::bail!("signature rejected for {}: {}", args.did, e),
    }
}

/// Document store first, did:key last, so a malformed did:key reports its
/// own decode error rather than the store's `DidNotFound`.
fn build_resolver(
    config: &SigilConfig,
    documents: Option<&Path>,
) -> anyhow::Result<CompositeDidResolver> {
    let mut resolver = CompositeDidResolver::new();
    if let Some(path) = documents {
        let local = load_documents(path)?;
        tracing::info!(count = local.len(), path = %path.display(), "loaded DID documents");
        resolver.add_resolver(Box::new(local));
    }
    Ok(resolver.with(DidKeyResolver::new(&config.key_manager.signing_key_id)))
}

fn load_documents(path: &Path) -> anyhow::Result<LocalDidResolver> {
    let contents = std::fs::read_to_string(path)?;
    let docs: Vec<DidDocument> = serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("invalid DID documents in {}: {}", path.display(), e))?;
    Ok(docs.into_iter().collect())
}
