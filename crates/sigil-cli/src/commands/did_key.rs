//! `sigil did-key` — Derive the did:key for a private key.

use clap::Args;
use sigil_crypto::{Curve, PrivateKey};

#[derive(Args, Debug)]
pub struct DidKeyArgs {
    /// Curve of the private key (p256, k256).
    #[arg(short, long)]
    pub curve: Curve,

    /// Hex-encoded private key.
    #[arg(long, conflicts_with = "base58", required_unless_present = "base58")]
    pub hex: Option<String>,

    /// Base58btc-encoded private key.
    #[arg(long)]
    pub base58: Option<String>,
}

pub fn run(args: &DidKeyArgs) -> anyhow::Result<()> {
    let key = match (&args.hex, &args.base58) {
        (Some(hex), _) => PrivateKey::from_hex(args.curve, hex)?,
        (None, Some(bs58)) => PrivateKey::from_bs58(args.curve, bs58)?,
        (None, None) => anyhow::bail!("one of --hex or --base58 is required"),
    };
    println!("{}", key.public().did_key());
    Ok(())
}
