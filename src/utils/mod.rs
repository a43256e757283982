//! Small shared helpers

pub mod decimal;
pub mod helper;

pub use decimal::{parse_decimal, price_to_decimal, scale_down, to_fixed, DEPOSIT_DECIMALS};
pub use helper::{format_address, truncate_string};
