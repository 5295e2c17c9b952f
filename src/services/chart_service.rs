use std::fs;
use chrono::{DateTime, Duration, Utc};
use plotters::prelude::*;
use crate::api::BinanceClient;
use crate::models::PricePoint;

/// Daily closes for `symbol` converted with `rate`
///
/// Any failure collapses to an empty series; callers treat empty as "no chart".
pub async fn get_converted_history(
    binance: &BinanceClient,
    symbol: &str,
    days: u32,
    rate: f64,
) -> Vec<PricePoint> {
    match binance.get_daily_closes(symbol, days).await {
        Ok(points) => {
            tracing::debug!("Loaded {} daily closes for {}", points.len(), symbol);
            convert_history(&points, rate)
        }
        Err(e) => {
            tracing::warn!("History lookup for {} ({} days) failed: {}", symbol, days, e);
            Vec::new()
        }
    }
}

pub fn convert_history(points: &[PricePoint], rate: f64) -> Vec<PricePoint> {
    points.iter().map(|p| p.converted(rate)).collect()
}

/// Y range with 10% padding, never below zero
pub fn price_bounds(points: &[PricePoint]) -> (f64, f64) {
    let min_price = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max_price = points.iter().map(|p| p.price).fold(f64::NEG_INFINITY, f64::max);

    let price_range = (max_price - min_price).max(max_price.abs() * 0.01).max(1e-8);
    let padding = price_range * 0.1;
    ((min_price - padding).max(0.0), max_price + padding)
}

/// Decimals needed for roughly ten distinct y-axis labels over `y_min..y_max`
pub fn label_decimals(y_min: f64, y_max: f64) -> usize {
    let step = (y_max - y_min).abs() / 10.0;
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 2;
    }
    ((-step.log10()).ceil() as usize + 1).clamp(2, 12)
}

/// X range; a single sample is widened by a day on each side
pub fn time_bounds(points: &[PricePoint]) -> (DateTime<Utc>, DateTime<Utc>) {
    let x_min = points.iter().map(|p| p.timestamp).min().unwrap_or_else(Utc::now);
    let x_max = points.iter().map(|p| p.timestamp).max().unwrap_or(x_min);

    if x_min == x_max {
        (x_min - Duration::days(1), x_max + Duration::days(1))
    } else {
        (x_min, x_max)
    }
}

/// Render a line chart of `points` as PNG bytes
pub fn generate_chart(
    label: &str,
    currency: &str,
    points: &[PricePoint],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    if points.is_empty() {
        return Err("❌ Could not load historical chart data.".to_string());
    }

    let temp_file = std::env::temp_dir().join(format!(
        "price_chart_{}_{}.png",
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));

    {
        let backend = BitMapBackend::new(&temp_file, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let (y_min, y_max) = price_bounds(points);
        let (x_min, x_max) = time_bounds(points);
        let decimals = label_decimals(y_min, y_max);

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{} Price History ({})", label, currency),
                ("sans-serif", 28.0).into_font(),
            )
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc(format!("Price ({})", currency))
            .x_labels(10)
            .x_label_formatter(&|dt: &DateTime<Utc>| dt.format("%Y-%m-%d").to_string())
            .y_label_formatter(&|v: &f64| format!("{:.*}", decimals, v))
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.timestamp, p.price)),
                &BLUE,
            ))
            .map_err(|e| format!("Failed to draw line: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    let image_data = fs::read(&temp_file)
        .map_err(|e| format!("Failed to read chart file: {}", e))?;

    if let Err(e) = fs::remove_file(&temp_file) {
        tracing::warn!("Failed to delete temporary chart file {}: {}", temp_file.display(), e);
    }

    Ok(image_data)
}
