//! Data models for the vault dashboard

pub mod action;
pub mod icon;
pub mod state;
pub mod vault;

// Re-export for convenience
pub use action::{Action, ActionKind};
pub use icon::{VaultIcon, FALLBACK_ICON_URL};
pub use state::{AppState, LoadingFlags, PortfolioTotals};
pub use vault::VaultRecord;
