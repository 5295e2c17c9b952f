pub mod chart_service;
pub mod pair_service;
pub mod ping_service;
pub mod price_service;

use std::sync::Arc;
use std::time::Duration;
use crate::api::{ApiError, BinanceClient, ForexClient};
use crate::config::Config;

/// Upstream clients shared by every command
pub struct ApiClients {
    pub binance: BinanceClient,
    pub forex: ForexClient,
}

impl ApiClients {
    pub fn from_config(config: &Config) -> Result<Arc<Self>, ApiError> {
        let timeout = Duration::from_secs(config.http_timeout_secs);
        Ok(Arc::new(Self {
            binance: BinanceClient::new(&config.binance_base_url, timeout)?,
            forex: ForexClient::new(&config.forex_base_url, timeout)?,
        }))
    }
}
