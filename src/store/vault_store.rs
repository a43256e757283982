//src/store/vault_store.rs
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::models::{action::Action, state::AppState};
use crate::reducer::reduce;
use crate::traits::{
    data_provider::VaultDataProvider,
    event_handler::StateEventHandler,
    price_provider::PriceProvider,
};

/// Owns the dashboard state and applies actions to it one at a time.
///
/// Every dispatch holds the write lock for the whole transition and its
/// notification, so both are serialized. Readers get cloned snapshots.
pub struct VaultStore {
    state: Arc<RwLock<AppState>>,
    event_handler: Arc<dyn StateEventHandler>,
}

impl VaultStore {
    /// Create a store holding the initial state
    pub fn new(event_handler: Arc<dyn StateEventHandler>) -> Self {
        Self::with_state(AppState::new(), event_handler)
    }

    /// Create a store starting from an existing state
    pub fn with_state(state: AppState, event_handler: Arc<dyn StateEventHandler>) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            event_handler,
        }
    }

    /// Snapshot of the current state
    pub async fn state(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Apply `action` and notify the event handler with the new state.
    ///
    /// The write lock is held until the handler returns, so handlers see
    /// states in the order they were produced. A handler must not call
    /// back into the store.
    pub async fn dispatch(&self, action: Action) -> AppState {
        let kind = action.kind();
        let mut current = self.state.write().await;
        let next = reduce(&current, &action);
        *current = next.clone();
        debug!("Dispatched {} ({} vaults)", kind, next.vault_count());

        self.event_handler.handle_state_change(&next, kind).await;
        drop(current);
        next
    }

    /// Fetch a vault batch and dispatch it as `VaultsLoaded`
    pub async fn load_vaults(&self, provider: &dyn VaultDataProvider) -> anyhow::Result<AppState> {
        match provider.fetch_vaults().await {
            Ok(vaults) => {
                info!("Loaded {} vaults from {}", vaults.len(), provider.name());
                Ok(self.dispatch(Action::VaultsLoaded { vaults }).await)
            }
            Err(e) => {
                self.event_handler.handle_error(&e).await;
                Err(e)
            }
        }
    }

    /// Fetch prices for every known vault and dispatch them as `PricesLoaded`
    pub async fn load_prices(&self, provider: &dyn PriceProvider) -> anyhow::Result<AppState> {
        let addresses: Vec<String> = self
            .state
            .read()
            .await
            .vaults
            .iter()
            .map(|v| v.address.clone())
            .collect();

        match provider.fetch_prices(&addresses).await {
            Ok(vaults) => {
                debug!("Fetched {}/{} vault prices", vaults.len(), addresses.len());
                Ok(self.dispatch(Action::PricesLoaded { vaults }).await)
            }
            Err(e) => {
                self.event_handler.handle_error(&e).await;
                Err(e)
            }
        }
    }

    /// Refresh prices forever at a fixed cadence
    pub async fn poll_prices(
        &self,
        provider: Arc<dyn PriceProvider>,
        tick_interval_ms: u64,
    ) -> anyhow::Result<()> {
        info!("Starting price polling with interval: {}ms", tick_interval_ms);

        let mut timedelta = Instant::now();

        loop {
            if let Err(e) = self.load_prices(provider.as_ref()).await {
                error!("Price refresh failed: {}", e);
            }

            let sleep_ms = tick_interval_ms as i128 - timedelta.elapsed().as_millis() as i128;
            if sleep_ms > 0 {
                tokio::time::sleep(Duration::from_millis(sleep_ms as u64)).await;
            }
            timedelta = Instant::now();
        }
    }
}

impl Clone for VaultStore {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            event_handler: self.event_handler.clone(),
        }
    }
}
