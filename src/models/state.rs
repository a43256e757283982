use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::vault::VaultRecord;

/// Which feeds are still outstanding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingFlags {
    pub vault_prices: bool,
    pub vaults: bool,
}

impl Default for LoadingFlags {
    fn default() -> Self {
        Self {
            vault_prices: true,
            vaults: true,
        }
    }
}

impl LoadingFlags {
    /// True once both feeds have delivered at least once
    pub fn is_done(&self) -> bool {
        !self.vault_prices && !self.vaults
    }
}

/// Portfolio-level figures derived from the vault collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_vault_earnings_usd: f64,
    /// Exact decimal string
    pub total_deposited_amount_usd: String,
    pub aggregate_apy: f64,
}

impl Default for PortfolioTotals {
    fn default() -> Self {
        Self {
            total_vault_earnings_usd: 0.0,
            total_deposited_amount_usd: "0".to_string(),
            aggregate_apy: 0.0,
        }
    }
}

/// Whole dashboard state. Replaced wholesale on every dispatch.
///
/// `connector` and `library` are opaque handles owned by the wallet layer
/// and are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub vaults: Vec<VaultRecord>,
    pub account: Option<String>,
    pub connector: Option<Value>,
    pub library: Option<Value>,
    pub chain_id: Option<u64>,
    pub connected: bool,
    pub ready: bool,
    pub loading: LoadingFlags,
    pub totals: Option<PortfolioTotals>,
    pub show_connector_modal: bool,
}

impl AppState {
    /// Initial state: no vaults, not connected, both feeds loading
    pub fn new() -> Self {
        Self {
            vaults: Vec::new(),
            account: None,
            connector: None,
            library: None,
            chain_id: None,
            connected: false,
            ready: false,
            loading: LoadingFlags::default(),
            totals: None,
            show_connector_modal: false,
        }
    }

    /// Look up a vault by address
    pub fn vault(&self, address: &str) -> Option<&VaultRecord> {
        self.vaults.iter().find(|v| v.address == address)
    }

    /// Number of known vaults
    pub fn vault_count(&self) -> usize {
        self.vaults.len()
    }

    /// Totals, or zeroes if nothing has been aggregated yet
    pub fn totals_or_default(&self) -> PortfolioTotals {
        self.totals.clone().unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
