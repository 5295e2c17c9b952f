use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub async fn execute(ctx: &Context, msg: &Message, prefix: &str) -> Result<(), String> {
    let embed = CreateEmbed::default()
        .title("📖 Crypto Price Tracker Help")
        .description("Look up a trading pair's exchange price, convert it to a fiat currency and chart recent daily closes.")
        .color(0x00b0f4)
        .field(
            "🎯 General",
            format!("`{p}ping` - Check bot latency\n`{p}help` - Show this help message", p = prefix),
            false,
        )
        .field(
            "💹 Prices & Charts",
            format!(
                "`{p}price [PAIR] [CURRENCY] [DAYS]` - Price and history chart\n\
                 Defaults: BTC/USDT, USD, 30 days. Arguments may come in any order.\n\
                 Examples: `{p}price`, `{p}price ETHUSDT INR`, `{p}price sol/usdt eur 90`",
                p = prefix
            ),
            false,
        )
        .field(
            "📃 Lookup",
            format!(
                "`{p}pairs [filter...] [page]` - Search trading pairs (all words must match)\n\
                 A trailing number is the page, so search numeric names with a page: `{p}pairs 1000 1`\n\
                 `{p}currencies` - Supported currencies and ranges",
                p = prefix
            ),
            false,
        )
        .field(
            "⚡ Rate Limiting",
            format!("{}-second cooldown per command per user", crate::utils::get_cooldown_seconds()),
            false,
        );

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}
