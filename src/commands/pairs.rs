use serenity::all::CreateEmbedFooter;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use crate::models::TradingPair;
use crate::services::pair_service;
use crate::utils::{Page, Table};

const PAIRS_PER_PAGE: usize = 20;

/// Split `$pairs` arguments into (filter, zero-based page)
///
/// A trailing number is the one-based page; every word before it is a filter term.
/// A numeric filter therefore needs an explicit page: `$pairs 1000 1`.
pub fn parse_pairs_args(args: &[&str]) -> (Option<String>, usize) {
    let (filter_args, page) = match args.split_last() {
        Some((last, rest)) => match last.parse::<usize>() {
            Ok(page) => (rest, page.saturating_sub(1)),
            Err(_) => (args, 0),
        },
        None => (args, 0),
    };

    let filter = (!filter_args.is_empty()).then(|| filter_args.join(" "));
    (filter, page)
}

pub fn render_pairs(pairs: &[&TradingPair]) -> String {
    let mut table = Table::new(&["Pair", "Symbol"]);
    for pair in pairs {
        table.add_row(&[pair.pair_name(), pair.symbol.clone()]);
    }
    table.render()
}

/// `$pairs [FILTER] [PAGE]`
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    let (filter, page_index) = parse_pairs_args(args);
    tracing::info!("📃 Pairs command: filter={:?} page={}", filter, page_index + 1);

    let clients = super::api_clients(ctx).await?;
    let pairs = pair_service::get_pairs(&clients.binance).await?;
    let matching = pair_service::filter_pairs(&pairs, filter.as_deref());

    if matching.is_empty() {
        return Err(format!(
            "❌ No trading pairs match '{}'",
            filter.unwrap_or_default()
        ));
    }

    let page = Page::new(&matching, PAIRS_PER_PAGE, page_index);
    let title = match &filter {
        Some(f) => format!("📃 Trading Pairs matching '{}'", f),
        None => "📃 Trading Pairs".to_string(),
    };

    let embed = CreateEmbed::default()
        .title(title)
        .description(render_pairs(page.current_items()))
        .footer(CreateEmbedFooter::new(format!(
            "{} • {} pairs",
            page.footer(),
            page.total_items()
        )))
        .color(0x00b0f4);

    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_args() {
        assert_eq!(parse_pairs_args(&[]), (None, 0));
        assert_eq!(parse_pairs_args(&["3"]), (None, 2));
        assert_eq!(parse_pairs_args(&["usdt"]), (Some("usdt".to_string()), 0));
        assert_eq!(parse_pairs_args(&["usdt", "2"]), (Some("usdt".to_string()), 1));
        assert_eq!(parse_pairs_args(&["0"]), (None, 0));
        assert_eq!(parse_pairs_args(&["usdt", "btc"]), (Some("usdt btc".to_string()), 0));
        assert_eq!(parse_pairs_args(&["usdt", "btc", "3"]), (Some("usdt btc".to_string()), 2));
        assert_eq!(parse_pairs_args(&["1000", "1"]), (Some("1000".to_string()), 0));
    }

    #[test]
    fn test_render_pairs_lists_symbols() {
        let btc = TradingPair::new("BTCUSDT", "BTC", "USDT");
        let eth = TradingPair::new("ETHBTC", "ETH", "BTC");
        let rendered = render_pairs(&[&btc, &eth]);
        assert!(rendered.contains("BTC/USDT | BTCUSDT"));
        assert!(rendered.contains("ETH/BTC  | ETHBTC"));
    }
}
