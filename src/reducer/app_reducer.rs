//src/reducer/app_reducer.rs
use std::collections::{HashMap, HashSet};

use bigdecimal::{BigDecimal, Zero};
use tracing::{debug, trace};

use crate::models::{Action, AppState, PortfolioTotals, VaultRecord};
use crate::utils::decimal::{
    decimal_str_to_f64, parse_decimal, price_to_decimal, scale_down, to_fixed, DEPOSIT_DECIMALS,
};

/// Compute the next state for `action`.
///
/// Never mutates `state` and never fails: unrecognized actions return an
/// unchanged copy, and vaults with missing or malformed numbers simply
/// stay unvalued.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::ConnectionConnected {
            account,
            connector,
            library,
            chain_id,
        } => {
            next.account = account.clone();
            next.connector = connector.clone();
            next.library = library.clone();
            next.chain_id = *chain_id;
            next.connected = true;
            next.ready = false;
        }
        Action::ConnectionUpdated {
            library,
            chain_id,
            active,
        } => {
            next.library = library.clone();
            next.chain_id = *chain_id;
            next.connected = *active;
        }
        Action::PricesLoaded { vaults } => {
            next.vaults = merge_by_address(&state.vaults, vaults);
            next.totals = Some(add_earnings(&mut next.vaults, vaults));
            next.loading.vault_prices = false;
        }
        Action::VaultsLoaded { vaults } => {
            next.vaults = merge_by_address(&state.vaults, vaults);
            next.totals = Some(add_earnings(&mut next.vaults, vaults));
            next.loading.vaults = false;
        }
        Action::ShowConnectorModal { show_modal } => {
            next.show_connector_modal = *show_modal;
        }
        Action::Unknown => {
            debug!("Ignoring unrecognized action");
        }
    }

    next
}

/// Merge `updates` into `existing`, keyed by address.
///
/// Existing records keep their position and receive every present field of
/// their update; addresses seen only in `updates` are appended in order.
pub fn merge_by_address(existing: &[VaultRecord], updates: &[VaultRecord]) -> Vec<VaultRecord> {
    let mut merged: Vec<VaultRecord> = existing.to_vec();
    let mut index: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, vault)| (vault.address.clone(), i))
        .collect();

    for update in updates {
        match index.get(&update.address) {
            Some(&i) => merged[i].merge_from(update),
            None => {
                index.insert(update.address.clone(), merged.len());
                merged.push(update.clone());
            }
        }
    }

    debug!(
        "Merged {} update(s) into {} vault(s) -> {} vault(s)",
        updates.len(),
        existing.len(),
        merged.len()
    );
    merged
}

/// Fill in `earnings_usd` and `deposited_amount_usd` where the inputs allow.
/// Anything missing leaves the corresponding field as it was.
pub fn add_earnings_and_deposits_usd(vault: &mut VaultRecord) {
    let price = vault.price_usd.and_then(price_to_decimal);

    let Some(price) = price else {
        trace!("Vault {} has no usable price yet", vault.address);
        return;
    };

    // a zero price values deposits at 0 but leaves earnings alone
    if !price.is_zero() {
        if let Some(earnings) = vault.earnings.as_deref().and_then(parse_decimal) {
            vault.earnings_usd = Some(to_fixed(&(&earnings * &price)));
        }
    }

    if let Some(deposited) = vault.deposited_amount.as_deref().and_then(parse_decimal) {
        let tokens = scale_down(&deposited, DEPOSIT_DECIMALS);
        vault.deposited_amount_usd = Some(to_fixed(&(&tokens * &price)));
    }
}

/// Sum of every vault's USD deposit, exact. Unvalued vaults count as zero.
pub fn total_deposited_usd(vaults: &[VaultRecord]) -> BigDecimal {
    vaults
        .iter()
        .filter_map(|v| v.deposited_amount_usd.as_deref().and_then(parse_decimal))
        .fold(BigDecimal::zero(), |acc, amount| acc + amount)
}

/// Deposit-weighted APY over `vaults`.
///
/// With a zero total every weight is 1, so the result is the plain sum of
/// the APY samples.
pub fn aggregate_apy(vaults: &[VaultRecord], total_deposited_usd: &BigDecimal) -> f64 {
    let total_is_zero = total_deposited_usd.is_zero();
    let total = decimal_str_to_f64(&to_fixed(total_deposited_usd));

    vaults.iter().fold(0.0, |acc, vault| {
        let ratio = if total_is_zero {
            1.0
        } else {
            vault
                .deposited_amount_usd
                .as_deref()
                .map(decimal_str_to_f64)
                .unwrap_or(0.0)
                / total
        };
        acc + ratio * vault.apy_one_week_sample.unwrap_or(0.0)
    })
}

/// Recompute derived fields on every vault and return fresh totals.
///
/// Deposit and APY totals cover the whole collection. The earnings total
/// only covers the addresses present in `batch`, read from their merged
/// records.
fn add_earnings(vaults: &mut [VaultRecord], batch: &[VaultRecord]) -> PortfolioTotals {
    for vault in vaults.iter_mut() {
        add_earnings_and_deposits_usd(vault);
    }

    let total_deposited = total_deposited_usd(vaults);
    let aggregate_apy = aggregate_apy(vaults, &total_deposited);

    let batch_addresses: HashSet<&str> = batch.iter().map(|v| v.address.as_str()).collect();
    let total_earnings = vaults
        .iter()
        .filter(|v| batch_addresses.contains(v.address.as_str()))
        .filter_map(|v| v.earnings_usd.as_deref().and_then(parse_decimal))
        .fold(BigDecimal::zero(), |acc, amount| acc + amount);

    let totals = PortfolioTotals {
        total_vault_earnings_usd: decimal_str_to_f64(&to_fixed(&total_earnings)),
        total_deposited_amount_usd: to_fixed(&total_deposited),
        aggregate_apy,
    };

    debug!(
        "Totals: earnings ${:.2}, deposited ${}, apy {:.4}%",
        totals.total_vault_earnings_usd, totals.total_deposited_amount_usd, totals.aggregate_apy
    );
    totals
}
