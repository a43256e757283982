//! Stand-in feeds for vault metadata and prices

pub mod price_provider;
pub mod sample_provider;

// Re-export for convenience
pub use price_provider::StaticPriceProvider;
pub use sample_provider::SampleVaultProvider;
