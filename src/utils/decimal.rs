//! Exact decimal helpers used for USD valuation.
//!
//! Token amounts arrive as decimal strings that do not fit in an `f64`
//! without losing digits, so every USD figure is computed with
//! [`BigDecimal`] and stored back as a plain decimal string.

use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, Zero};

/// Fixed precision of the raw `depositedAmount` field.
pub const DEPOSIT_DECIMALS: i64 = 18;

/// Parse a decimal string. Empty or malformed input yields `None`.
pub fn parse_decimal(value: &str) -> Option<BigDecimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    BigDecimal::from_str(trimmed).ok()
}

/// Convert a USD price into a decimal.
///
/// The price goes through its shortest round-trip text form, so `1.01`
/// becomes exactly `1.01` rather than the binary expansion of the float.
/// NaN and infinite prices count as "not priced"; zero is a real price.
pub fn price_to_decimal(price: f64) -> Option<BigDecimal> {
    if !price.is_finite() {
        return None;
    }
    BigDecimal::from_str(&price.to_string()).ok()
}

/// Shift a raw integer amount down by `decimals` places.
pub fn scale_down(amount: &BigDecimal, decimals: i64) -> BigDecimal {
    amount * &BigDecimal::new(BigInt::from(1), decimals)
}

/// Render a decimal in plain fixed notation without trailing zeros.
pub fn to_fixed(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    let normalized = value.normalized();
    let (_, scale) = normalized.as_bigint_and_exponent();
    if scale < 0 {
        normalized.with_scale(0).to_plain_string()
    } else {
        normalized.to_plain_string()
    }
}

/// Lossy conversion of a decimal string to `f64`; unparseable input is 0.
pub fn decimal_str_to_f64(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}
