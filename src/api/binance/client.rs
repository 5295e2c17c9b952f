use std::time::Duration;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::api::error::{self, ApiError};
use crate::models::{PricePoint, TradingPair};
use crate::utils::api_ratelimit::{throttle, Provider};
use super::models::{parse_kline_row, ExchangeInfoResponse, KlineRow, TickerPriceResponse};

/// Read-only client for the Binance spot REST API
pub struct BinanceClient {
    http_client: HttpClient,
    base_url: String,
}

impl BinanceClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.binance.com";

    /// Create a client against `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        throttle(Provider::Binance).await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self.http_client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(error::from_response(response).await);
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// GET /api/v3/exchangeInfo
    ///
    /// Returns every symbol currently in `TRADING` status, in exchange order.
    pub async fn list_pairs(&self) -> Result<Vec<TradingPair>, ApiError> {
        let info: ExchangeInfoResponse = self.get_json("/api/v3/exchangeInfo", &[]).await?;

        let pairs: Vec<TradingPair> = info
            .symbols
            .into_iter()
            .filter(|s| s.is_trading())
            .map(TradingPair::from)
            .collect();

        debug!("Exchange lists {} trading pairs", pairs.len());
        Ok(pairs)
    }

    /// GET /api/v3/ticker/price
    pub async fn get_price(&self, symbol: &str) -> Result<f64, ApiError> {
        let ticker: TickerPriceResponse = self
            .get_json("/api/v3/ticker/price", &[("symbol", symbol.to_string())])
            .await?;
        ticker.price()
    }

    /// GET /api/v3/klines with a 1d interval
    ///
    /// One point per day, oldest first, the last being the current (open) day.
    pub async fn get_daily_closes(&self, symbol: &str, days: u32) -> Result<Vec<PricePoint>, ApiError> {
        let rows: Vec<KlineRow> = self
            .get_json(
                "/api/v3/klines",
                &[
                    ("symbol", symbol.to_string()),
                    ("interval", "1d".to_string()),
                    ("limit", days.to_string()),
                ],
            )
            .await?;

        rows.iter().map(|row| parse_kline_row(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> BinanceClient {
        // Port 9 (discard) is closed on test hosts, so connects fail fast
        BinanceClient::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = unreachable_client();
        assert_eq!(client.base_url, "http://127.0.0.1:9");
    }

    #[tokio::test]
    async fn test_network_failure_surfaces_request_error() {
        let client = unreachable_client();
        assert!(matches!(client.get_price("BTCUSDT").await, Err(ApiError::Request(_))));
        assert!(matches!(client.get_daily_closes("BTCUSDT", 7).await, Err(ApiError::Request(_))));
        assert!(client.list_pairs().await.is_err());
    }
}
