use crate::api::BinanceClient;
use crate::models::TradingPair;

/// Pair the price command falls back to when none is given
pub const DEFAULT_PAIR_NAME: &str = "BTC/USDT";

/// Fetch every trading pair from the exchange
pub async fn get_pairs(binance: &BinanceClient) -> Result<Vec<TradingPair>, String> {
    binance.list_pairs().await.map_err(|e| {
        tracing::error!("Failed to load trading pairs: {}", e);
        "❌ Could not load trading pairs from the exchange.".to_string()
    })
}

/// First pair whose label mentions BTC/USDT, otherwise the first pair
pub fn default_pair(pairs: &[TradingPair]) -> Option<&TradingPair> {
    pairs
        .iter()
        .find(|p| p.label().contains(DEFAULT_PAIR_NAME))
        .or_else(|| pairs.first())
}

/// Case-insensitive match on the pair label; every whitespace-separated term must appear
pub fn filter_pairs<'a>(pairs: &'a [TradingPair], filter: Option<&str>) -> Vec<&'a TradingPair> {
    let terms: Vec<String> = filter
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_uppercase)
        .collect();

    pairs
        .iter()
        .filter(|p| {
            let label = p.label().to_uppercase();
            terms.iter().all(|t| label.contains(t.as_str()))
        })
        .collect()
}

/// Resolve a user argument to a trading pair
///
/// Accepts the exchange symbol (`BTCUSDT`), the pair name (`BTC/USDT`)
/// or the full label (`BTC/USDT (BTCUSDT)`), case-insensitively.
pub fn resolve_pair(pairs: &[TradingPair], arg: &str) -> Result<TradingPair, String> {
    let wanted = arg.trim().to_uppercase();

    if wanted.is_empty() {
        return Err("❌ Pair cannot be empty".to_string());
    }

    pairs
        .iter()
        .find(|p| p.symbol == wanted || p.pair_name() == wanted || p.label() == wanted)
        .cloned()
        .ok_or_else(|| {
            format!(
                "❌ Unknown or non-trading pair '{}'. Use `$pairs {}` to search.",
                arg.trim(),
                arg.trim()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairs() -> Vec<TradingPair> {
        vec![
            TradingPair::new("ETHBTC", "ETH", "BTC"),
            TradingPair::new("BTCUSDT", "BTC", "USDT"),
            TradingPair::new("ETHUSDT", "ETH", "USDT"),
            TradingPair::new("BTCUSDC", "BTC", "USDC"),
        ]
    }

    #[test]
    fn test_default_pair_prefers_btc_usdt() {
        let pairs = sample_pairs();
        assert_eq!(default_pair(&pairs).unwrap().symbol, "BTCUSDT");
    }

    #[test]
    fn test_default_pair_falls_back_to_first() {
        let pairs = vec![TradingPair::new("ETHBTC", "ETH", "BTC"), TradingPair::new("BNBETH", "BNB", "ETH")];
        assert_eq!(default_pair(&pairs).unwrap().symbol, "ETHBTC");
        assert!(default_pair(&[]).is_none());
    }

    #[test]
    fn test_resolve_pair_accepts_symbol_name_and_label() {
        let pairs = sample_pairs();
        assert_eq!(resolve_pair(&pairs, "ethusdt").unwrap().symbol, "ETHUSDT");
        assert_eq!(resolve_pair(&pairs, "eth/usdt").unwrap().symbol, "ETHUSDT");
        assert_eq!(resolve_pair(&pairs, "BTC/USDC (BTCUSDC)").unwrap().symbol, "BTCUSDC");
    }

    #[test]
    fn test_resolve_pair_rejects_unknown() {
        let pairs = sample_pairs();
        let err = resolve_pair(&pairs, "DOGEUSDT").unwrap_err();
        assert!(err.contains("DOGEUSDT"));
        assert!(resolve_pair(&pairs, "  ").is_err());
    }

    #[test]
    fn test_filter_pairs_matches_label_substring() {
        let pairs = sample_pairs();
        let usdt: Vec<&str> = filter_pairs(&pairs, Some("usdt")).into_iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(usdt, vec!["BTCUSDT", "ETHUSDT"]);
        assert_eq!(filter_pairs(&pairs, None).len(), 4);
        assert_eq!(filter_pairs(&pairs, Some("")).len(), 4);
        assert!(filter_pairs(&pairs, Some("XRP")).is_empty());
    }

    #[test]
    fn test_filter_pairs_requires_every_term() {
        let pairs = sample_pairs();
        let btc_usdt: Vec<&str> = filter_pairs(&pairs, Some("usdt btc")).into_iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(btc_usdt, vec!["BTCUSDT"]);
        assert!(filter_pairs(&pairs, Some("usdt xrp")).is_empty());
    }
}
