use std::time::Duration;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};
use crate::api::error::{self, ApiError};
use crate::utils::api_ratelimit::{throttle, Provider};
use super::models::LatestRatesResponse;

/// Client for USD-based fiat conversion rates
pub struct ForexClient {
    http_client: HttpClient,
    base_url: String,
}

impl ForexClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://open.er-api.com";

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET /v6/latest/USD
    pub async fn latest_usd_rates(&self) -> Result<LatestRatesResponse, ApiError> {
        throttle(Provider::Forex).await;

        let url = format!("{}/v6/latest/USD", self.base_url);
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(error::from_response(response).await);
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// USD -> `currency` multiplier, `Ok(None)` when the provider does not quote it
    pub async fn get_usd_rate(&self, currency: &str) -> Result<Option<f64>, ApiError> {
        let rates = self.latest_usd_rates().await?;

        if rates.result.as_deref() != Some("success") {
            warn!("Forex provider returned result {:?}", rates.result);
        }
        if rates.base_code.as_deref().is_some_and(|base| base != "USD") {
            warn!("Forex provider quoted base {:?} instead of USD", rates.base_code);
        }

        Ok(rates.rate(currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_network_failure_is_an_error_not_a_rate() {
        let client = ForexClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        assert!(matches!(client.get_usd_rate("EUR").await, Err(ApiError::Request(_))));
    }
}
