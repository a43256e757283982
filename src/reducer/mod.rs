//! State transitions for the dashboard

pub mod app_reducer;

pub use app_reducer::{
    add_earnings_and_deposits_usd, aggregate_apy, merge_by_address, reduce, total_deposited_usd,
};
