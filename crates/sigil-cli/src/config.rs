//! CLI configuration loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sigil_crypto::{Curve, PrivateKey};
use sigil_identity::KeyManagerConfig;
use zeroize::Zeroize;

/// Full configuration for the `sigil` CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SigilConfig {
    /// Key manager settings.
    #[serde(default)]
    pub key_manager: KeyManagerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Local identity settings.
    #[serde(default)]
    pub identity: IdentityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Path to a file holding the hex-encoded signing key.
    #[serde(default)]
    pub signing_key_path: Option<PathBuf>,
    /// Curve of the signing key.
    #[serde(default = "default_curve")]
    pub curve: Curve,
}

fn default_log_level() -> String {
    "warn".into()
}
fn default_log_format() -> String {
    "text".into()
}
fn default_curve() -> Curve {
    Curve::K256
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            signing_key_path: None,
            curve: default_curve(),
        }
    }
}

impl SigilConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: SigilConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the current config to a TOML file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl IdentityConfig {
    /// Read the configured signing key, if any.
    pub fn load_signing_key(&self) -> anyhow::Result<Option<PrivateKey>> {
        let Some(path) = &self.signing_key_path else {
            return Ok(None);
        };
        read_key_file(path, self.curve).map(Some)
    }
}

/// Read a hex-encoded private key from `path`.
pub fn read_key_file(path: &Path, curve: Curve) -> anyhow::Result<PrivateKey> {
    let mut contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read key file {}: {}", path.display(), e))?;
    let key = PrivateKey::from_hex(curve, &contents);
    contents.zeroize();
    Ok(key?)
}
