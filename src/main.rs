use std::sync::Arc;

use tracing::{error, info};

use vault_dashboard::{
    Action, ActionKind, AppConfig, CompositeEventHandler, ConsoleEventHandler, PriceProvider,
    SampleVaultProvider, StaticPriceProvider, VaultStore,
};

fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();

  let config = AppConfig::from_env()?;

  // Initialize logging
  tracing_subscriber::fmt()
    .with_level(true)
    .with_target(false)
    .with_max_level(config.log_level)
    .with_file(true)
    .with_line_number(true)
    .init();

  tokio::runtime::Runtime::new()?.block_on(async {
    info!("Initializing vault dashboard v{}...", vault_dashboard::VERSION);
    info!("Price poll interval: {}ms", config.price_poll_interval_ms);
    info!("Configured prices: {}", config.vault_prices.len());

    let mut handlers = CompositeEventHandler::new();
    handlers.subscribe(
      &[
        ActionKind::ConnectionConnected,
        ActionKind::ConnectionUpdated,
        ActionKind::VaultsLoaded,
        ActionKind::PricesLoaded,
      ],
      Arc::new(ConsoleEventHandler::from_config(&config)),
    );
    let store = VaultStore::new(Arc::new(handlers));

    if let Some(account) = &config.wallet_account {
      info!("Wallet Account: {}", account);
      store
        .dispatch(Action::ConnectionConnected {
          account: Some(account.clone()),
          connector: None,
          library: None,
          chain_id: Some(config.chain_id),
        })
        .await;
    }

    store.load_vaults(&SampleVaultProvider::new()).await?;

    let prices: Arc<dyn PriceProvider> =
      Arc::new(StaticPriceProvider::new(config.vault_prices.clone()));

    let store_for_task = store.clone();
    let interval = config.price_poll_interval_ms;
    tokio::spawn(async move {
      if let Err(e) = store_for_task.poll_prices(prices, interval).await {
        error!("Price polling error: {}", e);
      }
    });

    info!("Vault dashboard is running. Press Ctrl+C to stop.");

    // Keep the program running
    tokio::signal::ctrl_c().await?;

    let snapshot = store.state().await;
    info!("Final totals: {}", serde_json::to_string(&snapshot.totals_or_default())?);
    info!("Shutting down...");

    Ok(())
  })
}
