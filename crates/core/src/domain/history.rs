use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalSeries {
    pub symbol: String,
    pub timeframe: String,
    /// Axis labels; blank where a repeated bucket label was suppressed.
    pub labels: Vec<String>,
    #[serde(rename = "data")]
    pub prices: Vec<f64>,
    pub timestamps: Vec<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub updated_by: String,
}
