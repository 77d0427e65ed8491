//! `sigil keygen` — Generate a new private key.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use sigil_crypto::{Curve, PrivateKey};
use zeroize::Zeroize;

#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Curve to generate the key on (p256, k256).
    #[arg(short, long, default_value = "k256")]
    pub curve: Curve,

    /// Write the hex secret to this file instead of printing it.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &KeygenArgs) -> anyhow::Result<()> {
    let key = PrivateKey::generate(args.curve);
    let mut secret = hex::encode(key.secret_bytes());

    match &args.out {
        Some(path) => {
            let written = write_key_file(path, &secret);
            secret.zeroize();
            match written {
                Ok(()) => println!("Key written to {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    anyhow::bail!("refusing to overwrite existing key file {}", path.display())
                }
                Err(e) => anyhow::bail!("cannot write key file {}: {}", path.display(), e),
            }
        }
        None => println!("Private key: {}", secret),
    }
    secret.zeroize();

    println!("Curve:       {}", key.curve());
    println!("DID:         {}", key.public().did_key());
    Ok(())
}

/// Create `path` owner-readable only and write the hex secret to it.
/// Fails with `AlreadyExists` rather than replacing an existing file.
fn write_key_file(path: &Path, secret: &str) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.create_new(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(secret.as_bytes())?;
    file.write_all(b"\n")
}
