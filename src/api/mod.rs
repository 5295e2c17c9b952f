pub mod binance;
pub mod error;
pub mod forex;

pub use binance::BinanceClient;
pub use error::ApiError;
pub use forex::ForexClient;
