use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::traits::price_provider::PriceProvider;

/// Price provider backed by a fixed address -> USD table, with caching.
///
/// Addresses are matched case-insensitively since checksummed and
/// lowercase forms of the same address are both common.
pub struct StaticPriceProvider {
    known_prices: HashMap<String, f64>,
    price_cache: Arc<DashMap<String, f64>>,
}

impl StaticPriceProvider {
    /// Create a new provider from `(address, price)` pairs
    pub fn new(prices: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            known_prices: prices
                .into_iter()
                .map(|(address, price)| (address.to_lowercase(), price))
                .collect(),
            price_cache: Arc::new(DashMap::new()),
        }
    }

    /// Override or add a price; the cache entry is replaced too
    pub fn set_price(&mut self, address: &str, price: f64) {
        let key = address.to_lowercase();
        self.price_cache.insert(key.clone(), price);
        self.known_prices.insert(key, price);
    }

    /// Number of cached prices
    pub fn cached(&self) -> usize {
        self.price_cache.len()
    }

    fn lookup_price(&self, key: &str) -> Option<f64> {
        let price = self.known_prices.get(key).copied();
        match price {
            Some(p) => debug!("Found known price for {}: ${}", key, p),
            None => debug!("No price configured for {}", key),
        }
        price
    }
}

#[async_trait]
impl PriceProvider for StaticPriceProvider {
    async fn get_vault_price(&self, address: &str) -> Option<f64> {
        let key = address.to_lowercase();

        // Check cache first
        if let Some(price) = self.price_cache.get(&key) {
            return Some(*price);
        }

        let price = self.lookup_price(&key)?;
        self.price_cache.insert(key, price);
        Some(price)
    }
}
