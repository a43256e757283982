use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::{action::ActionKind, state::AppState};
use crate::traits::event_handler::StateEventHandler;
use crate::utils::helper::{format_address, truncate_string};

/// Console logging event handler
pub struct ConsoleEventHandler {
    show_vaults: bool,
}

impl ConsoleEventHandler {
    /// Create a new console event handler that also lists every vault
    pub fn new() -> Self {
        Self { show_vaults: true }
    }

    /// Only log the portfolio summary
    pub fn summary_only() -> Self {
        Self { show_vaults: false }
    }

    /// Per-vault listing when `LOG_VAULTS` is on, summary only otherwise
    pub fn from_config(config: &AppConfig) -> Self {
        if config.log_vaults {
            Self::new()
        } else {
            Self::summary_only()
        }
    }

    pub fn shows_vaults(&self) -> bool {
        self.show_vaults
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateEventHandler for ConsoleEventHandler {
    async fn handle_state_change(&self, state: &AppState, action: ActionKind) {
        match action {
            ActionKind::PricesLoaded | ActionKind::VaultsLoaded => {}
            ActionKind::ConnectionConnected | ActionKind::ConnectionUpdated => {
                info!(
                    "[{}] connected={} account={} chain={}",
                    action,
                    state.connected,
                    state.account.as_deref().map(format_address).unwrap_or_else(|| "-".to_string()),
                    state.chain_id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
                );
                return;
            }
            _ => return,
        }

        info!("{}", "=".repeat(80));
        info!(
            "[{}] {}",
            action,
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );

        if self.show_vaults {
            info!("{}", "-".repeat(80));
            for vault in &state.vaults {
                info!(
                    "  {} ({})",
                    truncate_string(vault.display_name(), 32),
                    format_address(&vault.address)
                );
                match (&vault.deposited_amount_usd, &vault.earnings_usd) {
                    (None, None) => info!("     Price: Not available"),
                    (deposited, earnings) => {
                        if let Some(price) = vault.price_usd {
                            info!("     Price: ${:.8}", price);
                        }
                        info!("     Deposited: ${}", deposited.as_deref().unwrap_or("-"));
                        info!("     Earnings: ${}", earnings.as_deref().unwrap_or("-"));
                    }
                }
                if let Some(apy) = vault.apy_one_week_sample {
                    info!("     APY (1w): {:.2}%", apy);
                }
            }
        }

        let totals = state.totals_or_default();
        info!("{}", "-".repeat(80));
        info!("Vaults: {}", state.vault_count());
        info!("Total Deposited: ${}", totals.total_deposited_amount_usd);
        info!("Total Earnings: ${:.2}", totals.total_vault_earnings_usd);
        info!("Aggregate APY: {:.2}%", totals.aggregate_apy);
        if !state.loading.is_done() {
            info!(
                "Still loading: prices={} vaults={}",
                state.loading.vault_prices, state.loading.vaults
            );
        }
        info!("{}", "=".repeat(80));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        warn!("Vault dashboard error: {}", error);
    }
}
