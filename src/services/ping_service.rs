use serenity::prelude::*;
use std::time::{Duration, Instant};
use crate::models::PingMetrics;

pub async fn get_ping_metrics(ctx: &Context, start_time: Instant) -> PingMetrics {
    let response_roundtrip = start_time.elapsed().as_millis() as u64;

    let uptime = {
        let data = ctx.data.read().await;
        match data.get::<crate::BotData>() {
            Some(bot_start_time) => format_uptime(bot_start_time.elapsed()),
            None => "Unknown".to_string(),
        }
    };

    PingMetrics {
        response_roundtrip,
        uptime,
    }
}

pub fn format_uptime(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
}

pub fn create_ping_embed(metrics: &PingMetrics) -> serenity::builder::CreateEmbed {
    serenity::builder::CreateEmbed::default()
        .title("Pong! 🏓")
        .field("Response Roundtrip", format!("{}ms", metrics.response_roundtrip), true)
        .field("Uptime", &metrics.uptime, false)
        .color(0x00b0f4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "0h 0m 0s");
        assert_eq!(format_uptime(Duration::from_secs(3725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "25h 1m 1s");
    }
}
