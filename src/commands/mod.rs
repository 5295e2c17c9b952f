pub mod currencies;
pub mod help;
pub mod pairs;
pub mod ping;
pub mod price;

use std::sync::Arc;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::prelude::Context;
use crate::services::ApiClients;
use crate::utils::{check_cooldown, check_global_rate_limit, user_message};

/// Split `content` into (command, args) when it starts with `prefix`
pub fn parse_command<'a>(content: &'a str, prefix: &str) -> Option<(String, Vec<&'a str>)> {
    let mut parts = content.split_whitespace();
    let first = parts.next()?;
    let name = first.strip_prefix(prefix)?;

    if name.is_empty() {
        return None;
    }

    Some((name.to_lowercase(), parts.collect()))
}

/// Fetch the shared API clients from the client data
pub async fn api_clients(ctx: &Context) -> Result<Arc<ApiClients>, String> {
    let data = ctx.data.read().await;
    data.get::<crate::ApiClientsKey>()
        .cloned()
        .ok_or_else(|| "API clients not initialized".to_string())
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let prefix = {
        let data = ctx.data.read().await;
        data.get::<crate::AppConfig>()
            .map(|c| c.command_prefix.clone())
            .unwrap_or_else(|| "$".to_string())
    };

    let Some((command, args)) = parse_command(&msg.content, &prefix) else {
        return;
    };

    if !matches!(command.as_str(), "ping" | "help" | "price" | "p" | "pairs" | "currencies" | "fiat") {
        return;
    }

    if let Err(remaining_ms) = check_global_rate_limit().await {
        tracing::warn!("Global rate limit hit, dropping {} from {} ({}ms)", command, msg.author.id, remaining_ms);
        return;
    }

    if let Err((remaining, should_warn)) = check_cooldown(msg.author.id, &command).await {
        if should_warn {
            if let Err(e) = msg.channel_id.send_message(
                ctx,
                CreateMessage::default().embed(
                    CreateEmbed::default()
                        .title("Command Cooldown")
                        .description(format!("⏳ Please wait {} seconds before using this command again.", remaining))
                        .color(0xffa500)
                )
            ).await {
                tracing::warn!("Failed to deliver cooldown warning: {}", e);
            }
        }
        return;
    }

    let result = match command.as_str() {
        "ping" => ping::execute(ctx, msg).await,
        "help" => help::execute(ctx, msg, &prefix).await,
        "price" | "p" => price::execute(ctx, msg, &args).await,
        "pairs" => pairs::execute(ctx, msg, &args).await,
        "currencies" | "fiat" => currencies::execute(ctx, msg).await,
        _ => return,
    };

    if let Err(e) = result {
        tracing::error!("❌ Error executing command {}: {}", command, e);
        send_error(ctx, msg, &e).await;
    }
}

/// Send an error to the user as a red embed
pub async fn send_error(ctx: &Context, msg: &Message, error_msg: &str) {
    let embed = CreateEmbed::default()
        .title("Command Error")
        .description(user_message(error_msg))
        .color(0xff0000);

    if let Err(e) = msg.channel_id
        .send_message(ctx, CreateMessage::default().embed(embed))
        .await
    {
        tracing::warn!("Failed to deliver error message: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_splits_name_and_args() {
        let (name, args) = parse_command("$PRICE ethusdt  inr 90", "$").unwrap();
        assert_eq!(name, "price");
        assert_eq!(args, vec!["ethusdt", "inr", "90"]);
    }

    #[test]
    fn test_parse_command_requires_prefix() {
        assert!(parse_command("price BTCUSDT", "$").is_none());
        assert!(parse_command("$", "$").is_none());
        assert!(parse_command("   ", "$").is_none());
        assert_eq!(parse_command("!pairs", "!").unwrap().0, "pairs");
    }
}
