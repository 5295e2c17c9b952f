//! Trading pair models

/// A tradable symbol on the exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingPair {
    pub symbol: String,
    pub base_asset: String,
    pub quote_asset: String,
}

impl TradingPair {
    pub fn new(symbol: &str, base_asset: &str, quote_asset: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            base_asset: base_asset.to_string(),
            quote_asset: quote_asset.to_string(),
        }
    }

    /// `BASE/QUOTE`
    pub fn pair_name(&self) -> String {
        format!("{}/{}", self.base_asset, self.quote_asset)
    }

    /// Human-readable label, e.g. `BTC/USDT (BTCUSDT)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.pair_name(), self.symbol)
    }
}
