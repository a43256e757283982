use vault_dashboard::providers::sample_provider::{CRVBTC_VAULT, YUSD_VAULT, YYFI_VAULT};
use vault_dashboard::{reduce, Action, AppState, SampleVaultProvider, VaultRecord};

const APY_SUM: f64 = 18.389875280469848 + 16.848218508254302 + 0.0010391510209644523;

fn loaded() -> AppState {
    reduce(
        &AppState::new(),
        &Action::VaultsLoaded {
            vaults: SampleVaultProvider::sample_vaults(),
        },
    )
}

#[test]
fn vaults_without_prices_stay_unvalued() {
    let state = loaded();

    assert_eq!(state.vault_count(), 3);
    assert!(!state.loading.vaults);
    assert!(state.loading.vault_prices);
    for vault in &state.vaults {
        assert!(vault.earnings_usd.is_none(), "{} has earnings", vault.address);
        assert!(vault.deposited_amount_usd.is_none(), "{} has deposits", vault.address);
    }

    let totals = state.totals.unwrap();
    assert_eq!(totals.total_deposited_amount_usd, "0");
    assert_eq!(totals.total_vault_earnings_usd, 0.0);
    // zero total: every weight is 1
    assert!((totals.aggregate_apy - APY_SUM).abs() < 1e-9);
}

#[test]
fn prices_populate_every_vault() {
    let state = reduce(
        &loaded(),
        &Action::PricesLoaded {
            vaults: vec![
                VaultRecord::with_price(YUSD_VAULT, 2.0),
                VaultRecord::with_price(CRVBTC_VAULT, 10.0),
                VaultRecord::with_price(YYFI_VAULT, 4.0),
            ],
        },
    );

    assert!(state.loading.is_done());

    let yusd = state.vault(YUSD_VAULT).unwrap();
    assert_eq!(yusd.earnings_usd.as_deref(), Some("3022.83390389037575637532"));
    assert_eq!(yusd.deposited_amount_usd.as_deref(), Some("2400.886721547069206492"));
    assert_eq!(yusd.vault_alias.as_deref(), Some("yUSD Vault"));

    let crvbtc = state.vault(CRVBTC_VAULT).unwrap();
    assert_eq!(crvbtc.earnings_usd.as_deref(), Some("0.3732248231535317072"));
    assert_eq!(crvbtc.deposited_amount_usd.as_deref(), Some("39.90497287468911017"));

    let yyfi = state.vault(YYFI_VAULT).unwrap();
    assert_eq!(yyfi.earnings_usd.as_deref(), Some("0.01223527180776088"));
    assert_eq!(yyfi.deposited_amount_usd.as_deref(), Some("0"));

    let totals = state.totals.unwrap();
    assert_eq!(totals.total_deposited_amount_usd, "2440.791694421758316662");
    assert!((totals.total_vault_earnings_usd - 3023.219363985337).abs() < 1e-6);

    let expected_apy = 2400.886721547069206492 / 2440.791694421758316662 * 18.389875280469848
        + 39.90497287468911017 / 2440.791694421758316662 * 16.848218508254302;
    assert!((totals.aggregate_apy - expected_apy).abs() < 1e-9);
}

#[test]
fn partial_price_batch_only_counts_its_own_earnings() {
    let state = reduce(
        &loaded(),
        &Action::PricesLoaded {
            vaults: vec![VaultRecord::with_price(CRVBTC_VAULT, 10.0)],
        },
    );

    assert!(state.vault(YUSD_VAULT).unwrap().earnings_usd.is_none());
    let totals = state.totals.unwrap();
    assert_eq!(totals.total_deposited_amount_usd, "39.90497287468911017");
    assert!((totals.total_vault_earnings_usd - 0.3732248231535317072).abs() < 1e-12);
    // only crvBTC has a deposit, so it carries the full weight
    assert!((totals.aggregate_apy - 16.848218508254302).abs() < 1e-9);
}

#[test]
fn json_actions_drive_the_same_transitions() {
    let state = loaded();
    let action = Action::from_json(&format!(
        r#"{{"type":"PRICES_LOADED","vaults":[{{"address":"{}","priceUsd":10}}]}}"#,
        CRVBTC_VAULT
    ))
    .unwrap();

    let from_json = reduce(&state, &action);
    let typed = reduce(
        &state,
        &Action::PricesLoaded {
            vaults: vec![VaultRecord::with_price(CRVBTC_VAULT, 10.0)],
        },
    );
    assert_eq!(from_json, typed);

    let snapshot = serde_json::to_value(&from_json).unwrap();
    assert_eq!(snapshot["loading"]["vaultPrices"], false);
    assert_eq!(
        snapshot["totals"]["totalDepositedAmountUsd"],
        "39.90497287468911017"
    );
}
