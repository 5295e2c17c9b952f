use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Error type shared by the exchange and forex clients
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network/request error (connect, timeout, body read)
    #[error("Request Error: {0}")]
    Request(#[from] reqwest::Error),

    /// Error body returned by the exchange, e.g. `{"code":-1121,"msg":"Invalid symbol."}`
    #[error("Exchange Error ({code}): {msg}")]
    Exchange { code: i64, msg: String },

    /// 429/418 Too Many Requests
    #[error("Rate Limited. Retry after {retry_after} s")]
    RateLimited { retry_after: u64 },

    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),

    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),

    /// Body did not have the expected shape
    #[error("Deserialization Error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Deserialization(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeErrorBody {
    code: i64,
    msg: String,
}

/// Map a non-success response to an `ApiError`
pub(crate) async fn from_response(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok());
    let body_text = response.text().await.unwrap_or_default();

    classify(status.as_u16(), retry_after, body_text)
}

fn classify(status_code: u16, retry_after: Option<u64>, body_text: String) -> ApiError {
    match status_code {
        418 | 429 => {
            let retry_after = retry_after.unwrap_or(1);
            warn!("Rate limited ({}), retry after {} s", status_code, retry_after);
            ApiError::RateLimited { retry_after }
        }
        500..=599 => {
            warn!("Server error {}: {}", status_code, body_text);
            ApiError::ServerError(status_code, body_text)
        }
        _ => match serde_json::from_str::<ExchangeErrorBody>(&body_text) {
            Ok(body) => ApiError::Exchange {
                code: body.code,
                msg: body.msg,
            },
            Err(_) => ApiError::HttpError(status_code, body_text),
        },
    }
}
