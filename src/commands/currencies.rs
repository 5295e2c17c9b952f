use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use crate::services::price_service::{
    DEFAULT_CURRENCY, DEFAULT_HISTORY_DAYS, HISTORY_RANGES, SUPPORTED_CURRENCIES,
};

pub fn currencies_embed() -> CreateEmbed {
    let currencies = SUPPORTED_CURRENCIES
        .iter()
        .map(|c| if *c == DEFAULT_CURRENCY { format!("**{}** (default)", c) } else { c.to_string() })
        .collect::<Vec<_>>()
        .join(", ");

    let ranges = HISTORY_RANGES
        .iter()
        .map(|d| if *d == DEFAULT_HISTORY_DAYS { format!("**{}d** (default)", d) } else { format!("{}d", d) })
        .collect::<Vec<_>>()
        .join(", ");

    CreateEmbed::default()
        .title("💱 Conversion Options")
        .field("Currencies", currencies, false)
        .field("Chart Ranges", ranges, false)
        .field("Rates", "USD-based rates from ExchangeRate-API, fetched on every request", false)
        .color(0x00b0f4)
}

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(currencies_embed()))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
