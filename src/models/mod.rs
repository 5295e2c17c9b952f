//! Data models for price tracker commands and services
//!
//! Each model is recomputed on every command; nothing here outlives a single
//! interaction.

pub mod chart;
pub mod pair;
pub mod price;
pub mod ping;

// Re-export commonly used types for convenience
pub use chart::PricePoint;
pub use pair::TradingPair;
pub use price::QuoteResult;
pub use ping::PingMetrics;
