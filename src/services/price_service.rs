use tracing::{info, warn};
use crate::api::{BinanceClient, ForexClient};
use crate::models::{QuoteResult, TradingPair};

/// Fiat currencies offered for conversion, in display order
pub const SUPPORTED_CURRENCIES: [&str; 10] = [
    "USD", "INR", "EUR", "GBP", "JPY", "AED", "AUD", "CAD", "CNY", "SGD",
];
pub const DEFAULT_CURRENCY: &str = "USD";

/// Chart ranges in days
pub const HISTORY_RANGES: [u32; 5] = [7, 30, 90, 180, 365];
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Parsed `$price` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceArgs {
    pub pair: Option<String>,
    pub currency: String,
    pub days: u32,
}

/// Validate a currency argument against the supported list
pub fn parse_currency(arg: &str) -> Result<String, String> {
    let currency = arg.trim().to_uppercase();
    if SUPPORTED_CURRENCIES.contains(&currency.as_str()) {
        Ok(currency)
    } else {
        Err(format!(
            "❌ Unsupported currency '{}'. Supported: {}",
            arg.trim(),
            SUPPORTED_CURRENCIES.join(", ")
        ))
    }
}

/// Parse a history range: `30` or `30d`
pub fn parse_days(arg: &str) -> Result<u32, String> {
    let lowered = arg.trim().to_lowercase();
    let number = lowered.strip_suffix('d').unwrap_or(&lowered);

    let days = number
        .parse::<u32>()
        .map_err(|_| format!("❌ Invalid range '{}'", arg.trim()))?;

    if HISTORY_RANGES.contains(&days) {
        Ok(days)
    } else {
        Err(format!(
            "❌ Unsupported range '{}'. Supported: {} days",
            arg.trim(),
            HISTORY_RANGES.map(|d| d.to_string()).join(", ")
        ))
    }
}

fn looks_like_days(arg: &str) -> bool {
    let lowered = arg.trim().to_lowercase();
    let number = lowered.strip_suffix('d').unwrap_or(&lowered);
    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

/// Classify `$price` arguments in any order
///
/// Digits (optionally suffixed with `d`) are the range, a supported
/// currency code is the currency, anything else is the pair.
pub fn parse_price_args(args: &[&str]) -> Result<PriceArgs, String> {
    let mut pair: Option<String> = None;
    let mut currency: Option<String> = None;
    let mut days: Option<u32> = None;

    for arg in args {
        if looks_like_days(arg) {
            if days.is_some() {
                return Err("❌ Range given more than once".to_string());
            }
            days = Some(parse_days(arg)?);
        } else if SUPPORTED_CURRENCIES.contains(&arg.trim().to_uppercase().as_str()) {
            if currency.is_some() {
                return Err("❌ Currency given more than once".to_string());
            }
            currency = Some(parse_currency(arg)?);
        } else {
            if pair.is_some() {
                return Err(format!("❌ Unexpected argument '{}'", arg));
            }
            pair = Some(arg.trim().to_string());
        }
    }

    Ok(PriceArgs {
        pair,
        currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        days: days.unwrap_or(DEFAULT_HISTORY_DAYS),
    })
}

pub fn convert(price: f64, rate: f64) -> f64 {
    price * rate
}

/// USD -> `currency` rate; every failure collapses to `None`
pub async fn get_forex_rate(forex: &ForexClient, currency: &str) -> Option<f64> {
    match forex.get_usd_rate(currency).await {
        Ok(Some(rate)) => Some(rate),
        Ok(None) => {
            warn!("Forex provider has no rate for {}", currency);
            None
        }
        Err(e) => {
            warn!("Forex rate lookup for {} failed: {}", currency, e);
            None
        }
    }
}

/// Spot price of `pair` converted into `currency`
pub async fn get_quote(
    binance: &BinanceClient,
    forex: &ForexClient,
    pair: &TradingPair,
    currency: &str,
) -> Result<QuoteResult, String> {
    let spot_price = binance.get_price(&pair.symbol).await.map_err(|e| {
        tracing::error!("Price lookup for {} failed: {}", pair.symbol, e);
        format!("❌ Could not get price for {}", pair.label())
    })?;

    let forex_rate = get_forex_rate(forex, currency)
        .await
        .ok_or_else(|| format!("❌ Could not get forex rate for {}", currency))?;

    let final_price = convert(spot_price, forex_rate);
    info!(
        "{} = {} x {} = {} {}",
        pair.symbol, spot_price, forex_rate, final_price, currency
    );

    Ok(QuoteResult {
        label: pair.label(),
        symbol: pair.symbol.clone(),
        currency: currency.to_string(),
        spot_price,
        forex_rate,
        final_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_price_args_defaults() {
        let args = parse_price_args(&[]).unwrap();
        assert_eq!(
            args,
            PriceArgs {
                pair: None,
                currency: "USD".to_string(),
                days: 30
            }
        );
    }

    #[test]
    fn test_parse_price_args_any_order() {
        let args = parse_price_args(&["90d", "inr", "ETH/USDT"]).unwrap();
        assert_eq!(args.pair.as_deref(), Some("ETH/USDT"));
        assert_eq!(args.currency, "INR");
        assert_eq!(args.days, 90);

        let args = parse_price_args(&["SOLUSDT", "7"]).unwrap();
        assert_eq!(args.pair.as_deref(), Some("SOLUSDT"));
        assert_eq!(args.currency, "USD");
        assert_eq!(args.days, 7);
    }

    #[test]
    fn test_parse_price_args_rejects_duplicates_and_bad_ranges() {
        assert!(parse_price_args(&["EUR", "GBP"]).is_err());
        assert!(parse_price_args(&["BTCUSDT", "ETHUSDT"]).is_err());
        assert!(parse_price_args(&["7", "30"]).is_err());
        assert!(parse_price_args(&["14"]).unwrap_err().contains("Unsupported range"));
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency(" jpy ").unwrap(), "JPY");
        assert!(parse_currency("CHF").unwrap_err().contains("Supported"));
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("365").unwrap(), 365);
        assert_eq!(parse_days("180D").unwrap(), 180);
        assert!(parse_days("week").is_err());
        assert!(parse_days("0").is_err());
    }

    #[test]
    fn test_convert_multiplies_price_by_rate() {
        assert_eq!(convert(100.0, 83.5), 8350.0);
        assert_eq!(convert(65000.0, 1.0), 65000.0);
        assert_eq!(convert(0.0, 0.92), 0.0);
    }

    #[tokio::test]
    async fn test_get_forex_rate_collapses_failure_to_none() {
        let forex = ForexClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        assert_eq!(get_forex_rate(&forex, "EUR").await, None);
    }

    /// Serve one canned JSON response on a local port, returning its base URL
    async fn serve_once(body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_get_quote_halts_without_forex_rate() {
        let exchange_url = serve_once(r#"{"symbol":"BTCUSDT","price":"65000.00"}"#).await;
        let binance = BinanceClient::new(&exchange_url, Duration::from_secs(5)).unwrap();
        let forex = ForexClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let pair = TradingPair::new("BTCUSDT", "BTC", "USDT");

        let err = get_quote(&binance, &forex, &pair, "INR").await.unwrap_err();
        assert_eq!(err, "❌ Could not get forex rate for INR");
    }

    #[tokio::test]
    async fn test_get_quote_converts_spot_price() {
        let exchange_url = serve_once(r#"{"symbol":"ETHUSDT","price":"3000.00"}"#).await;
        let forex_url = serve_once(r#"{"result":"success","base_code":"USD","rates":{"USD":1,"EUR":0.5}}"#).await;
        let binance = BinanceClient::new(&exchange_url, Duration::from_secs(5)).unwrap();
        let forex = ForexClient::new(&forex_url, Duration::from_secs(5)).unwrap();
        let pair = TradingPair::new("ETHUSDT", "ETH", "USDT");

        let quote = get_quote(&binance, &forex, &pair, "EUR").await.unwrap();
        assert_eq!(quote.spot_price, 3000.0);
        assert_eq!(quote.forex_rate, 0.5);
        assert_eq!(quote.final_price, 1500.0);
        assert_eq!(quote.label, "ETH/USDT (ETHUSDT)");
    }

    #[tokio::test]
    async fn test_get_quote_reports_price_failure() {
        let binance = BinanceClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let forex = ForexClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let pair = TradingPair::new("BTCUSDT", "BTC", "USDT");

        let err = get_quote(&binance, &forex, &pair, "EUR").await.unwrap_err();
        assert_eq!(err, "❌ Could not get price for BTC/USDT (BTCUSDT)");
    }
}
