use async_trait::async_trait;
use tracing::debug;

use crate::models::vault::VaultRecord;
use crate::traits::data_provider::VaultDataProvider;

pub const YUSD_VAULT: &str = "0x5dbcF33D8c2E976c6b560249878e6F1491Bca25c";
pub const CRVBTC_VAULT: &str = "0x7Ff566E1d69DEfF32a7b244aE7276b9f90e9D0f6";
pub const YYFI_VAULT: &str = "0xBA2E7Fed597fd0E3e70f5130BcDbbFE06bB94fe1";

const CONTROLLER: &str = "0x9E65Ad11b299CA0Abefc2799dDB6314Ef2d91080";

/// Vault feed serving a fixed snapshot of three yearn vaults.
/// Prices are not included; they come from a [`PriceProvider`](crate::traits::PriceProvider).
pub struct SampleVaultProvider;

impl SampleVaultProvider {
    pub fn new() -> Self {
        Self
    }

    /// The snapshot itself
    pub fn sample_vaults() -> Vec<VaultRecord> {
        vec![yusd(), crvbtc(), yyfi()]
    }

    /// Reference prices for the sample vaults, used when none are configured
    pub fn sample_prices() -> Vec<(String, f64)> {
        vec![
            (YUSD_VAULT.to_string(), 1.18),
            (CRVBTC_VAULT.to_string(), 10_560.0),
            (YYFI_VAULT.to_string(), 31_250.0),
        ]
    }
}

impl Default for SampleVaultProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VaultDataProvider for SampleVaultProvider {
    async fn fetch_vaults(&self) -> anyhow::Result<Vec<VaultRecord>> {
        let vaults = Self::sample_vaults();
        debug!("Serving {} sample vaults", vaults.len());
        Ok(vaults)
    }

    fn name(&self) -> &str {
        "sample"
    }
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn yusd() -> VaultRecord {
    VaultRecord {
        name: s("yearn Curve.fi yDAI/yUSDC/yUSDT/yTUSD"),
        symbol: s("yyDAI+yUSDC+yUSDT+yTUSD"),
        vault_alias: s("yUSD Vault"),
        symbol_alias: s("yUSD"),
        decimals: Some(18),
        token_address: s("0xdF5e0e81Dff6FAF3A7e52BA697820c5e32D806A8"),
        token_name: s("Curve.fi yDAI/yUSDC/yUSDT/yTUSD"),
        token_symbol: s("yDAI+yUSDC+yUSDT+yTUSD"),
        token_symbol_alias: s("yCRV"),
        controller_address: s(CONTROLLER),
        controller_name: s("Controller"),
        strategy_address: s("0xc999fb87AcA383A63D804A575396F65A55aa5aC8"),
        strategy_name: s("StrategyCurveYCRVVoter"),
        delegated: Some(false),
        wrapped: Some(false),
        timestamp: Some(1600762801825),
        vault_icon: s("https://assets.coingecko.com/coins/images/12210/large/yUSD.png?1600166557"),
        token_icon: s("https://assets.coingecko.com/coins/images/11858/large/yCrv.png?1595203628"),
        apy_one_week_sample: Some(18.389875280469848),
        apy_one_month_sample: Some(47.87688226812791),
        apy_inception_sample: Some(69.20628081223127),
        total_deposits: s("31040130299999999999998"),
        total_withdrawals: s("32551547207174188582424"),
        total_transferred_in: s("0"),
        total_transferred_out: s("0"),
        deposited_shares: s("40702473720021"),
        deposited_amount: s("1200443360773534603246"),
        earnings: s("1511.41695194518787818766"),
        ..VaultRecord::new(YUSD_VAULT)
    }
}

fn crvbtc() -> VaultRecord {
    VaultRecord {
        name: s("yearn Curve.fi renBTC/wBTC/sBTC"),
        symbol: s("ycrvRenWSBTC"),
        vault_alias: s("crvBTC Vault"),
        symbol_alias: s("ycrvBTC"),
        decimals: Some(18),
        token_address: s("0x075b1bb99792c9E1041bA13afEf80C91a1e70fB3"),
        token_name: s("Curve.fi renBTC/wBTC/sBTC"),
        token_symbol: s("crvRenWSBTC"),
        token_symbol_alias: s("crvBTC"),
        controller_address: s(CONTROLLER),
        controller_name: s("Controller"),
        strategy_address: s("0x134c08fAeE4F902999a616e31e0B7e42114aE320"),
        strategy_name: s("StrategyCurveBTCVoterProxy"),
        delegated: Some(false),
        wrapped: Some(false),
        timestamp: Some(1600762850556),
        token_icon: s(
            "https://assets.coingecko.com/coins/images/11958/large/Curvefi_sbtcCrv_32.png?1596436054",
        ),
        apy_one_week_sample: Some(16.848218508254302),
        apy_one_month_sample: Some(36.77398919487813),
        apy_inception_sample: Some(36.77398919487813),
        total_deposits: s("3443360773534603246"),
        total_withdrawals: s("0"),
        total_transferred_in: s("509814031618954600"),
        total_transferred_out: s("0"),
        deposited_shares: s("3886689595445743849"),
        deposited_amount: s("3990497287468911017"),
        earnings: s("0.03732248231535317072"),
        ..VaultRecord::new(CRVBTC_VAULT)
    }
}

fn yyfi() -> VaultRecord {
    VaultRecord {
        name: s("yearn yearn.finance"),
        symbol: s("yYFI"),
        vault_alias: s("YFI Vault"),
        symbol_alias: s("yYFI"),
        decimals: Some(18),
        token_address: s("0x0bc529c00C6401aEF6D220BE8C6Ea1667F6Ad93e"),
        token_name: s("yearn.finance"),
        token_symbol: s("YFI"),
        token_symbol_alias: s("YFI"),
        controller_address: s(CONTROLLER),
        controller_name: s("Controller"),
        strategy_address: s("0x40BD98e3ccE4F34c087a73DD3d05558733549afB"),
        strategy_name: s("StrategyCreamYFI"),
        delegated: Some(false),
        wrapped: Some(false),
        timestamp: Some(1600762835382),
        token_icon: s("https://assets.coingecko.com/coins/images/11849/large/yfi-192x192.png?1598325330"),
        apy_one_week_sample: Some(0.0010391510209644523),
        apy_one_month_sample: Some(1.1788380651301567),
        apy_inception_sample: Some(1.6653494694564572),
        total_deposits: s("2072499999999999999"),
        total_withdrawals: s("2075558817951940219"),
        total_transferred_in: s("0"),
        total_transferred_out: s("0"),
        deposited_shares: s("0"),
        deposited_amount: s("0"),
        earnings: s("0.00305881795194022"),
        ..VaultRecord::new(YYFI_VAULT)
    }
}
