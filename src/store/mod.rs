//! Serialized owner of the dashboard state

pub mod vault_store;

pub use vault_store::VaultStore;
