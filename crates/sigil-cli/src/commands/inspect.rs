//! `sigil inspect` — Decode a did:key.

use clap::Args;
use sigil_crypto::PublicKey;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The did:key to decode.
    pub did: String,
}

pub fn run(args: &InspectArgs) -> anyhow::Result<()> {
    let key = PublicKey::from_did_key(&args.did)
        .map_err(|e| anyhow::anyhow!("cannot decode {}: {}", args.did, e))?;

    println!("DID:          {}", key.did_key());
    println!("Curve:        {}", key.curve());
    println!("Compressed:   {}", key.to_hex());
    println!("Multibase:    {}", key.to_multibase());
    Ok(())
}
