use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSummary {
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetails {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub percent_change: f64,
    /// Trillions.
    pub market_cap: f64,
    /// Millions of shares.
    pub volume: f64,
    pub avg_volume: f64,
    pub pe: f64,
    pub eps: f64,
    /// Percent.
    pub dividend: f64,
    pub high_52w: f64,
    pub low_52w: f64,
    pub open: f64,
    pub previous_close: f64,
    pub timestamp: DateTime<Utc>,
    pub analyst: AnalystRatings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalystRatings {
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
}
