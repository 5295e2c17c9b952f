use std::env;
use thiserror::Error;
use crate::api::{BinanceClient, ForexClient};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("Invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub command_prefix: String,
    pub binance_base_url: String,
    pub forex_base_url: String,
    pub http_timeout_secs: u64,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| ConfigError::Missing("DISCORD_TOKEN"))?;

        Ok(Self {
            discord_token,
            command_prefix: env::var("COMMAND_PREFIX").unwrap_or_else(|_| "$".to_string()),
            binance_base_url: env::var("BINANCE_BASE_URL")
                .unwrap_or_else(|_| BinanceClient::DEFAULT_BASE_URL.to_string()),
            forex_base_url: env::var("FOREX_BASE_URL")
                .unwrap_or_else(|_| ForexClient::DEFAULT_BASE_URL.to_string()),
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", "10")?,
            chart_width: parse_var("CHART_WIDTH", "1024")?,
            chart_height: parse_var("CHART_HEIGHT", "512")?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid { name, value })
}
