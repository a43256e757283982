use async_trait::async_trait;

use crate::models::vault::VaultRecord;

/// Source of vault metadata and balances
#[async_trait]
pub trait VaultDataProvider: Send + Sync {
    /// Fetch the current vault batch
    async fn fetch_vaults(&self) -> anyhow::Result<Vec<VaultRecord>>;

    /// Human-readable name for logs
    fn name(&self) -> &str {
        "vault-feed"
    }
}
