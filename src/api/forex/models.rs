use std::collections::HashMap;
use serde::Deserialize;

/// Response from GET /v6/latest/USD on ExchangeRate-API (open access, no key)
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRatesResponse {
    pub result: Option<String>,
    pub base_code: Option<String>,
    /// Currency code -> units per 1 USD; absent on error responses
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl LatestRatesResponse {
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(&currency.to_uppercase()).copied()
    }
}
