use serde::Deserialize;
use serde_json::Value;
use chrono::{DateTime, Utc};
use crate::models::{PricePoint, TradingPair};
use crate::api::ApiError;

/// Response from GET /api/v3/exchangeInfo (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfoResponse {
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
}

impl SymbolInfo {
    pub fn is_trading(&self) -> bool {
        self.status == "TRADING"
    }
}

impl From<SymbolInfo> for TradingPair {
    fn from(info: SymbolInfo) -> Self {
        TradingPair::new(&info.symbol, &info.base_asset, &info.quote_asset)
    }
}

/// Response from GET /api/v3/ticker/price?symbol=...
#[derive(Debug, Clone, Deserialize)]
pub struct TickerPriceResponse {
    pub symbol: String,
    pub price: String,
}

impl TickerPriceResponse {
    pub fn price(&self) -> Result<f64, ApiError> {
        self.price
            .parse::<f64>()
            .map_err(|_| ApiError::Deserialization(format!("Invalid price '{}' for {}", self.price, self.symbol)))
    }
}

/// One row from GET /api/v3/klines
///
/// `[open_time, open, high, low, close, volume, close_time, ...]`, prices as strings.
pub type KlineRow = Vec<Value>;

const OPEN_TIME_INDEX: usize = 0;
const CLOSE_INDEX: usize = 4;

/// Extract (open time, close price) from a kline row
pub fn parse_kline_row(row: &[Value]) -> Result<PricePoint, ApiError> {
    let open_time = row
        .get(OPEN_TIME_INDEX)
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::Deserialization("Kline row missing open time".to_string()))?;

    let close = match row.get(CLOSE_INDEX) {
        Some(Value::String(s)) => s.parse::<f64>().ok(),
        Some(v) => v.as_f64(),
        None => None,
    }
    .ok_or_else(|| ApiError::Deserialization("Kline row missing close price".to_string()))?;

    let timestamp: DateTime<Utc> = DateTime::from_timestamp_millis(open_time)
        .ok_or_else(|| ApiError::Deserialization(format!("Invalid kline open time {}", open_time)))?;

    Ok(PricePoint {
        timestamp,
        price: close,
    })
}
