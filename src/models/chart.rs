//! Chart generation models

use chrono::{DateTime, Utc};

/// A single daily close on a price chart
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    /// Same sample, price multiplied by `rate`
    pub fn converted(&self, rate: f64) -> Self {
        Self {
            timestamp: self.timestamp,
            price: self.price * rate,
        }
    }
}
