use std::str::FromStr;

use anyhow::Context;
use tracing::level_filters::LevelFilter;

use crate::providers::SampleVaultProvider;

/// Runtime settings, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PRICE_POLL_INTERVAL_MS`
    pub price_poll_interval_ms: u64,
    /// `VAULT_PRICES`, as `address=price,address=price`
    pub vault_prices: Vec<(String, f64)>,
    /// `WALLET_ACCOUNT`
    pub wallet_account: Option<String>,
    /// `CHAIN_ID`
    pub chain_id: u64,
    /// `LOG_LEVEL`
    pub log_level: LevelFilter,
    /// `LOG_VAULTS`: list every vault on each update, not just totals
    pub log_vaults: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            price_poll_interval_ms: 30_000,
            vault_prices: SampleVaultProvider::sample_prices(),
            wallet_account: None,
            chain_id: 1,
            log_level: LevelFilter::DEBUG,
            log_vaults: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("PRICE_POLL_INTERVAL_MS") {
            config.price_poll_interval_ms = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PRICE_POLL_INTERVAL_MS: {}", raw))?;
        }

        if let Some(raw) = lookup("VAULT_PRICES") {
            config.vault_prices = parse_price_table(&raw)?;
        }

        config.wallet_account = lookup("WALLET_ACCOUNT").filter(|s| !s.trim().is_empty());

        if let Some(raw) = lookup("CHAIN_ID") {
            config.chain_id = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid CHAIN_ID: {}", raw))?;
        }

        if let Some(raw) = lookup("LOG_LEVEL") {
            config.log_level = LevelFilter::from_str(raw.trim())
                .map_err(|e| anyhow::anyhow!("Invalid LOG_LEVEL {}: {}", raw, e))?;
        }

        if let Some(raw) = lookup("LOG_VAULTS") {
            config.log_vaults = parse_flag(&raw)
                .with_context(|| format!("Invalid LOG_VAULTS: {}", raw))?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse `address=price` pairs separated by commas
pub fn parse_price_table(raw: &str) -> anyhow::Result<Vec<(String, f64)>> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> anyhow::Result<(String, f64)> {
            let (address, price) = entry
                .split_once('=')
                .with_context(|| format!("Expected address=price, got {}", entry))?;
            let price: f64 = price
                .trim()
                .parse()
                .with_context(|| format!("Invalid price for {}", address.trim()))?;
            Ok((address.trim().to_string(), price))
        })
        .collect()
}
