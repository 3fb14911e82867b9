use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "HOLD")]
    Hold,
    #[serde(rename = "WATCH")]
    Watch,
    #[serde(rename = "SELL")]
    Sell,
}

impl Recommendation {
    /// First matching tier wins; both bounds are strict.
    pub fn from_signal(percent_change: f64, confidence: u32) -> Self {
        if percent_change > 10.0 && confidence > 75 {
            Self::StrongBuy
        } else if percent_change > 5.0 {
            Self::Buy
        } else if percent_change > 0.0 {
            Self::Hold
        } else if percent_change > -5.0 {
            Self::Watch
        } else {
            Self::Sell
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorCategory {
    Technical,
    Fundamental,
    Sentiment,
    Sector,
}

impl FactorCategory {
    pub const ORDERED: [FactorCategory; 4] = [
        FactorCategory::Technical,
        FactorCategory::Fundamental,
        FactorCategory::Sentiment,
        FactorCategory::Sector,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Technical => "Technical Analysis",
            Self::Fundamental => "Fundamental Analysis",
            Self::Sentiment => "Market Sentiment",
            Self::Sector => "Sector Performance",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ORDERED.into_iter().find(|c| c.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub impact: Impact,
    /// Percent share of the prediction; the four factors of a prediction sum to 100.
    pub weight: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub symbol: String,
    pub current_price: f64,
    pub predicted_price: f64,
    pub percent_change: f64,
    pub confidence: u32,
    /// Echoed verbatim, unknown labels included.
    pub timeframe: String,
    pub recommendation: Recommendation,
    pub factors: Vec<Factor>,
    pub generated_at: DateTime<Utc>,
    pub generated_by: String,
    pub timestamp: DateTime<Utc>,
    pub updated_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_buy_requires_both_strict_bounds() {
        assert_eq!(Recommendation::from_signal(10.01, 76), Recommendation::StrongBuy);
        assert_eq!(Recommendation::from_signal(10.0, 90), Recommendation::Buy);
        assert_eq!(Recommendation::from_signal(12.0, 75), Recommendation::Buy);
    }

    #[test]
    fn lower_tiers() {
        assert_eq!(Recommendation::from_signal(5.0, 90), Recommendation::Hold);
        assert_eq!(Recommendation::from_signal(0.0, 90), Recommendation::Watch);
        assert_eq!(Recommendation::from_signal(-4.99, 90), Recommendation::Watch);
        assert_eq!(Recommendation::from_signal(-5.0, 90), Recommendation::Sell);
    }

    #[test]
    fn serializes_wire_names() {
        assert_eq!(
            serde_json::to_value(Recommendation::StrongBuy).unwrap(),
            serde_json::json!("STRONG BUY")
        );
        assert_eq!(
            serde_json::to_value(Impact::Negative).unwrap(),
            serde_json::json!("negative")
        );
    }

    #[test]
    fn category_names_round_trip() {
        for c in FactorCategory::ORDERED {
            assert_eq!(FactorCategory::from_name(c.name()), Some(c));
        }
        assert_eq!(FactorCategory::from_name("Macro"), None);
    }
}
