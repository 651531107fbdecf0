//! Fetching transaction log messages from a Solana RPC node.

use crate::config::SolanaConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcTransactionConfig};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use solana_transaction_status::UiTransactionEncoding;

/// A source of raw transaction log lines.
///
/// Abstracts over the live `RpcClient` so the inspection flow can be tested
/// without a validator.
#[async_trait]
pub trait TransactionLogSource: Send + Sync {
    /// Returns the log messages of the transaction identified by `signature`.
    async fn fetch_logs(&self, signature: &Signature) -> Result<Vec<String>>;
}

#[async_trait]
impl TransactionLogSource for RpcClient {
    async fn fetch_logs(&self, signature: &Signature) -> Result<Vec<String>> {
        let tx_config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Base64),
            commitment: Some(self.commitment()),
            max_supported_transaction_version: Some(0),
        };

        let tx = self
            .get_transaction_with_config(signature, tx_config)
            .await
            .with_context(|| format!("Failed to get transaction {}", signature))?;

        let meta = tx
            .transaction
            .meta
            .ok_or_else(|| anyhow::anyhow!("Transaction {} has no status meta", signature))?;

        let logs: Option<Vec<String>> = meta.log_messages.into();
        let logs =
            logs.ok_or_else(|| anyhow::anyhow!("Transaction {} has no log messages", signature))?;

        tracing::debug!(%signature, lines = logs.len(), "Fetched transaction logs");
        Ok(logs)
    }
}

/// Creates an RPC client for the configured cluster.
pub fn rpc_client(config: &SolanaConfig) -> RpcClient {
    RpcClient::new_with_commitment(
        config.rpc_url.clone(),
        CommitmentConfig {
            commitment: config.commitment,
        },
    )
}
