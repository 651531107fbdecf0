use anyhow::{Context, Result};
use logscope_logger::LogConfig;
use serde::Deserialize;
use solana_sdk::commitment_config::CommitmentLevel;

/// The top-level configuration for the logscope inspector.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct InspectorConfig {
    #[serde(default)]
    pub solana: SolanaConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Defines the connection settings for the Solana cluster.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SolanaConfig {
    pub rpc_url: String,
    #[serde(with = "serde_commitment")]
    pub commitment: CommitmentLevel,
}

impl Default for SolanaConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8899".to_string(),
            commitment: CommitmentLevel::Confirmed,
        }
    }
}

/// Loads the inspector configuration from a TOML file.
///
/// Environment variables prefixed with `LOGSCOPE` override the file, with `__`
/// separating nested keys, e.g. `LOGSCOPE__LOG__LEVEL=debug`.
pub fn load_config(path: &str) -> Result<InspectorConfig> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix("LOGSCOPE").separator("__"));

    let settings: InspectorConfig = builder
        .build()
        .context(format!("Failed to build configuration from '{}'", path))?
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    Ok(settings)
}

mod serde_commitment {
    use super::*;
    use serde::Deserializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<CommitmentLevel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let level = match s.to_lowercase().as_str() {
            "processed" => CommitmentLevel::Processed,
            "confirmed" => CommitmentLevel::Confirmed,
            "finalized" => CommitmentLevel::Finalized,
            other => {
                return Err(serde::de::Error::custom(format!(
                    "unknown commitment level '{}'",
                    other
                )))
            }
        };
        Ok(level)
    }
}
