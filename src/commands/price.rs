use serenity::all::{CreateAttachment, CreateEmbedFooter};
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use crate::models::QuoteResult;
use crate::services::{chart_service, pair_service, price_service};
use crate::utils::format_thousands;

/// `$price [PAIR] [CURRENCY] [DAYS]`
pub async fn execute(ctx: &Context, msg: &Message, args: &[&str]) -> Result<(), String> {
    tracing::info!("💹 Price command from {} with args: {:?}", msg.author.id, args);

    let price_args = price_service::parse_price_args(args)?;
    let clients = super::api_clients(ctx).await?;

    let (chart_width, chart_height) = {
        let data = ctx.data.read().await;
        data.get::<crate::AppConfig>()
            .map(|c| (c.chart_width, c.chart_height))
            .unwrap_or((1024, 512))
    };

    if let Err(e) = msg.channel_id.broadcast_typing(ctx.http.as_ref()).await {
        tracing::warn!("Failed to broadcast typing: {}", e);
    }

    let pairs = pair_service::get_pairs(&clients.binance).await?;
    let pair = match price_args.pair.as_deref() {
        Some(arg) => pair_service::resolve_pair(&pairs, arg)?,
        None => pair_service::default_pair(&pairs)
            .cloned()
            .ok_or_else(|| "❌ The exchange returned no trading pairs.".to_string())?,
    };

    let quote = price_service::get_quote(&clients.binance, &clients.forex, &pair, &price_args.currency).await?;

    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(quote_embed(&quote, price_args.days)))
        .await
        .map_err(|e| e.to_string())?;

    let history = chart_service::get_converted_history(
        &clients.binance,
        &pair.symbol,
        price_args.days,
        quote.forex_rate,
    )
    .await;

    if history.is_empty() {
        return Err("❌ Could not load historical chart data.".to_string());
    }

    let chart_data = chart_service::generate_chart(
        &quote.label,
        &quote.currency,
        &history,
        chart_width,
        chart_height,
    )?;
    tracing::info!("✓ Chart generated for {}: {} points, {} bytes", quote.symbol, history.len(), chart_data.len());

    let filename = format!("{}_{}_{}d.png", pair.symbol, quote.currency, price_args.days);
    let chart_embed = CreateEmbed::default()
        .title(format!("{} Price History ({})", quote.label, quote.currency))
        .image(format!("attachment://{}", filename))
        .color(0x00b0f4);

    msg.channel_id
        .send_message(
            ctx,
            CreateMessage::default()
                .embed(chart_embed)
                .add_file(CreateAttachment::bytes(chart_data, filename)),
        )
        .await
        .map_err(|e| format!("Failed to send chart: {}", e))?;

    Ok(())
}

/// Metric text, e.g. `INR 5,412,345.1234`
pub fn metric_value(quote: &QuoteResult) -> String {
    format!("{} {}", quote.currency, format_thousands(quote.final_price, 4))
}

fn quote_embed(quote: &QuoteResult, days: u32) -> CreateEmbed {
    CreateEmbed::default()
        .title(format!("{} Price ({})", quote.label, quote.currency))
        .description(format!("**{}**", metric_value(quote)))
        .field("Exchange Price", format!("{}", quote.spot_price), true)
        .field("Forex Rate", format!("1 USD = {} {}", quote.forex_rate, quote.currency), true)
        .footer(CreateEmbedFooter::new(format!("Chart range: {} days", days)))
        .color(0x00ff00)
}
