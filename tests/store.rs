use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use vault_dashboard::providers::sample_provider::{CRVBTC_VAULT, YUSD_VAULT, YYFI_VAULT};
use vault_dashboard::{
    Action, ActionKind, AppState, SampleVaultProvider, StateEventHandler, StaticPriceProvider,
    VaultDataProvider, VaultRecord, VaultStore,
};

#[derive(Default)]
struct RecordingHandler {
    changes: Mutex<Vec<(ActionKind, AppState)>>,
    errors: Mutex<Vec<String>>,
}

#[async_trait]
impl StateEventHandler for RecordingHandler {
    async fn handle_state_change(&self, state: &AppState, action: ActionKind) {
        self.changes.lock().await.push((action, state.clone()));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        self.errors.lock().await.push(error.to_string());
    }
}

struct BrokenFeed;

#[async_trait]
impl VaultDataProvider for BrokenFeed {
    async fn fetch_vaults(&self) -> anyhow::Result<Vec<VaultRecord>> {
        Err(anyhow::anyhow!("vault feed unavailable"))
    }
}

fn store() -> (VaultStore, Arc<RecordingHandler>) {
    let handler = Arc::new(RecordingHandler::default());
    (VaultStore::new(handler.clone()), handler)
}

#[tokio::test]
async fn dispatch_notifies_with_new_state() {
    let (store, handler) = store();

    let next = store
        .dispatch(Action::ConnectionConnected {
            account: Some("0xabc".to_string()),
            connector: None,
            library: None,
            chain_id: Some(1),
        })
        .await;

    assert!(next.connected);
    assert!(!next.ready);
    assert_eq!(store.state().await, next);

    let changes = handler.changes.lock().await;
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].0, ActionKind::ConnectionConnected);
    assert_eq!(changes[0].1, next);
}

#[tokio::test]
async fn snapshots_are_independent_of_later_dispatches() {
    let (store, _) = store();
    store.load_vaults(&SampleVaultProvider::new()).await.unwrap();

    let before = store.state().await;
    store
        .dispatch(Action::PricesLoaded {
            vaults: vec![VaultRecord::with_price(YUSD_VAULT, 2.0)],
        })
        .await;

    assert!(before.vault(YUSD_VAULT).unwrap().price_usd.is_none());
    assert_eq!(store.state().await.vault(YUSD_VAULT).unwrap().price_usd, Some(2.0));
}

#[tokio::test]
async fn loads_vaults_then_prices() {
    let (store, handler) = store();
    let prices = StaticPriceProvider::new(vec![
        (YUSD_VAULT.to_string(), 2.0),
        (CRVBTC_VAULT.to_string(), 10.0),
        (YYFI_VAULT.to_string(), 4.0),
    ]);

    let state = store.load_vaults(&SampleVaultProvider::new()).await.unwrap();
    assert_eq!(state.totals.unwrap().total_deposited_amount_usd, "0");

    let state = store.load_prices(&prices).await.unwrap();
    assert!(state.loading.is_done());
    assert!(state.vaults.iter().all(|v| v.is_priced()));
    assert_eq!(
        state.totals.unwrap().total_deposited_amount_usd,
        "2440.791694421758316662"
    );

    let kinds: Vec<ActionKind> = handler.changes.lock().await.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, vec![ActionKind::VaultsLoaded, ActionKind::PricesLoaded]);
}

#[tokio::test]
async fn feed_errors_are_reported_and_leave_state_alone() {
    let (store, handler) = store();

    let result = store.load_vaults(&BrokenFeed).await;

    assert!(result.is_err());
    assert_eq!(store.state().await, AppState::new());
    assert_eq!(
        *handler.errors.lock().await,
        vec!["vault feed unavailable".to_string()]
    );
    assert!(handler.changes.lock().await.is_empty());
}

#[tokio::test]
async fn unknown_action_passes_state_through() {
    let (store, handler) = store();
    store.load_vaults(&SampleVaultProvider::new()).await.unwrap();
    let before = store.state().await;

    let after = store.dispatch(Action::Unknown).await;

    assert_eq!(before, after);
    assert_eq!(handler.changes.lock().await.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_dispatches_notify_in_transition_order() {
    let (store, handler) = store();

    let mut tasks = Vec::new();
    for i in 0..32 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store
                .dispatch(Action::VaultsLoaded {
                    vaults: vec![VaultRecord::new(format!("0x{:02x}", i))],
                })
                .await
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    // each dispatch adds one vault, so in-order notifications count up by one
    let counts: Vec<usize> = handler
        .changes
        .lock()
        .await
        .iter()
        .map(|(_, state)| state.vault_count())
        .collect();
    assert_eq!(counts, (1..=32).collect::<Vec<usize>>());
    assert_eq!(store.state().await.vault_count(), 32);
}
