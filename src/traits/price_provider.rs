use async_trait::async_trait;

use crate::models::vault::VaultRecord;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Get the USD price of a vault's share token
    async fn get_vault_price(&self, address: &str) -> Option<f64>;

    /// Get prices for multiple vaults (optimized batch request)
    async fn get_batch_prices(&self, addresses: &[String]) -> Vec<Option<f64>> {
        let mut prices = Vec::with_capacity(addresses.len());
        for address in addresses {
            prices.push(self.get_vault_price(address).await);
        }
        prices
    }

    /// Build a price-only partial record for every address that has a price
    async fn fetch_prices(&self, addresses: &[String]) -> anyhow::Result<Vec<VaultRecord>> {
        let prices = self.get_batch_prices(addresses).await;
        Ok(addresses
            .iter()
            .zip(prices)
            .filter_map(|(address, price)| price.map(|p| VaultRecord::with_price(address.clone(), p)))
            .collect())
    }
}
