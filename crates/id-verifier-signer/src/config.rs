/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed signer configuration
[POS]:    Configuration layer - flow setup
[UPDATE]: When adding new configuration options
*/

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the signer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignerConfig {
    /// Verifier backend base URL
    pub verifier_url: String,
    /// Account address to prove ownership of
    pub account: String,
    /// Path to the pre-generated proof document
    pub proof_path: PathBuf,
    /// Suppress activation of the signature control
    #[serde(default)]
    pub disabled: bool,
}

impl SignerConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
