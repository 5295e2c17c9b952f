//! Price query models

/// Spot price of a pair converted into a fiat currency
#[derive(Debug, Clone)]
pub struct QuoteResult {
    pub label: String,
    pub symbol: String,
    pub currency: String,
    /// Exchange price in the pair's quote asset (treated as USD)
    pub spot_price: f64,
    /// USD -> `currency` multiplier
    pub forex_rate: f64,
    pub final_price: f64,
}
