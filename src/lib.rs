//! Vault Dashboard Library
//!
//! State store for a DeFi vault dashboard: vault records, wallet
//! connection, loading flags and portfolio totals, all driven by a pure
//! reducer over discrete actions.

// Public modules - these are the API surface
pub mod config;
pub mod models;
pub mod reducer;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod store;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::AppConfig;
pub use models::{
    action::{Action, ActionKind},
    icon::{VaultIcon, FALLBACK_ICON_URL},
    state::{AppState, LoadingFlags, PortfolioTotals},
    vault::VaultRecord,
};
pub use reducer::{merge_by_address, reduce};
pub use traits::{
    data_provider::VaultDataProvider,
    price_provider::PriceProvider,
    event_handler::StateEventHandler,
};
pub use providers::{
    price_provider::StaticPriceProvider,
    sample_provider::SampleVaultProvider,
};
pub use handlers::{
    console::ConsoleEventHandler,
    composite::CompositeEventHandler,
};
pub use store::vault_store::VaultStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
