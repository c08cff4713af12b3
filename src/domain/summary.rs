// src/domain/summary.rs
use crate::collector::models::{DataSource, PropertyRecord};
use chrono::Local;

/// Aggregate view of one run, as printed by the console summary.
#[derive(Debug, PartialEq)]
pub struct CollectionSummary {
    pub district: String,
    pub total_properties: usize,
    pub average_price: f64,
    pub date_collected: String,
    pub data_source: DataSource,
}

/// Pure aggregation over the already-built store. Empty input is answered
/// with zeroes rather than an error.
pub fn summarize(
    district: &str,
    records: &[PropertyRecord],
    source: DataSource,
) -> CollectionSummary {
    let total = records.len();

    let average = if total == 0 {
        0.0
    } else {
        let sum: i64 = records.iter().map(|r| r.price).sum();
        round2(sum as f64 / total as f64)
    };

    CollectionSummary {
        district: district.to_string(),
        total_properties: total,
        average_price: average,
        date_collected: Local::now().format("%Y-%m-%d").to_string(),
        data_source: source,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
