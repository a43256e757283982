use serde::{Deserialize, Serialize};

/// One vault as reported by the vault and price feeds.
///
/// Every field except `address` is optional so the same type carries both
/// full records and partial updates (a price batch usually holds only
/// `address` and `priceUsd`). `earnings_usd` and `deposited_amount_usd` are
/// derived by the reducer and never expected from a feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultRecord {
    pub address: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub vault_alias: Option<String>,
    pub symbol_alias: Option<String>,
    pub decimals: Option<u8>,

    pub token_address: Option<String>,
    pub token_name: Option<String>,
    pub token_symbol: Option<String>,
    pub token_symbol_alias: Option<String>,
    pub controller_address: Option<String>,
    pub controller_name: Option<String>,
    pub strategy_address: Option<String>,
    pub strategy_name: Option<String>,
    pub delegated: Option<bool>,
    pub wrapped: Option<bool>,
    pub timestamp: Option<i64>,
    pub vault_icon: Option<String>,
    pub token_icon: Option<String>,

    pub price_usd: Option<f64>,
    /// Earnings in token units, as a decimal string
    pub earnings: Option<String>,
    /// Raw smallest-unit integer string
    pub deposited_amount: Option<String>,
    pub deposited_shares: Option<String>,
    pub total_deposits: Option<String>,
    pub total_withdrawals: Option<String>,
    pub total_transferred_in: Option<String>,
    pub total_transferred_out: Option<String>,
    pub apy_one_week_sample: Option<f64>,
    pub apy_one_month_sample: Option<f64>,
    pub apy_inception_sample: Option<f64>,

    pub earnings_usd: Option<String>,
    pub deposited_amount_usd: Option<String>,
}

macro_rules! overwrite_present {
    ($dst:ident, $src:ident; $($field:ident),+ $(,)?) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field.clone();
            }
        )+
    };
}

impl VaultRecord {
    /// Create an empty record for an address
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Price-only partial update, the shape a price feed produces
    pub fn with_price(address: impl Into<String>, price_usd: f64) -> Self {
        Self {
            price_usd: Some(price_usd),
            ..Self::new(address)
        }
    }

    /// Apply every present field of `update` on top of this record.
    /// Fields absent in `update` keep their current value.
    pub fn merge_from(&mut self, update: &VaultRecord) {
        overwrite_present!(self, update;
            name, symbol, vault_alias, symbol_alias, decimals,
            token_address, token_name, token_symbol, token_symbol_alias,
            controller_address, controller_name, strategy_address, strategy_name,
            delegated, wrapped, timestamp, vault_icon, token_icon,
            price_usd, earnings, deposited_amount, deposited_shares,
            total_deposits, total_withdrawals, total_transferred_in, total_transferred_out,
            apy_one_week_sample, apy_one_month_sample, apy_inception_sample,
            earnings_usd, deposited_amount_usd,
        );
    }

    /// Name to show in listings: alias first, then the on-chain name
    pub fn display_name(&self) -> &str {
        self.vault_alias
            .as_deref()
            .or(self.name.as_deref())
            .or(self.symbol.as_deref())
            .unwrap_or(&self.address)
    }

    /// Whether the reducer has been able to value this vault in USD
    pub fn is_priced(&self) -> bool {
        self.deposited_amount_usd.is_some() || self.earnings_usd.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_absent_fields() {
        let mut vault = VaultRecord {
            name: Some("yearn yearn.finance".to_string()),
            earnings: Some("0.5".to_string()),
            price_usd: Some(1.0),
            ..VaultRecord::new("0xabc")
        };

        vault.merge_from(&VaultRecord::with_price("0xabc", 2.5));

        assert_eq!(vault.price_usd, Some(2.5));
        assert_eq!(vault.earnings.as_deref(), Some("0.5"));
        assert_eq!(vault.name.as_deref(), Some("yearn yearn.finance"));
    }

    #[test]
    fn deserializes_camel_case_partial_records() {
        let vault: VaultRecord = serde_json::from_str(
            r#"{"address":"0xabc","priceUsd":2,"depositedAmount":"5000000000000000000","apyOneWeekSample":1.5}"#,
        )
        .unwrap();

        assert_eq!(vault.address, "0xabc");
        assert_eq!(vault.price_usd, Some(2.0));
        assert_eq!(vault.deposited_amount.as_deref(), Some("5000000000000000000"));
        assert_eq!(vault.apy_one_week_sample, Some(1.5));
        assert!(vault.earnings.is_none());
    }

    #[test]
    fn display_name_prefers_alias() {
        let mut vault = VaultRecord::new("0xabc");
        assert_eq!(vault.display_name(), "0xabc");
        vault.name = Some("yearn yearn.finance".to_string());
        assert_eq!(vault.display_name(), "yearn yearn.finance");
        vault.vault_alias = Some("YFI Vault".to_string());
        assert_eq!(vault.display_name(), "YFI Vault");
    }
}
