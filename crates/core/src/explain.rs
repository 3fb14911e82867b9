//! Turns a prediction's factors into readable text. Pure template filling over the prediction;
//! no randomness.

use crate::domain::explanation::{Explanation, FactorExplanation, Interpretation, Methodology};
use crate::domain::prediction::{FactorCategory, Impact, PredictionResult};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

const CAVEATS: [&str; 3] = [
    "This prediction is based on historical patterns and may not account for unexpected events.",
    "Past performance is not indicative of future results.",
    "The model works best in stable market conditions and may be less accurate during high volatility.",
];

const METHODOLOGY_DESCRIPTION: &str = "This prediction uses a hybrid model combining technical analysis, fundamental metrics, and market sentiment.";

const METHODOLOGY_FEATURES: [&str; 4] = [
    "Historical price patterns and technical indicators",
    "Financial metrics and company fundamentals",
    "News sentiment and social media analysis",
    "Market sector performance and macroeconomic factors",
];

pub fn explain(
    symbol: &str,
    prediction: &PredictionResult,
    now: DateTime<Utc>,
    attribution: &str,
) -> Explanation {
    let sentiment = if prediction.percent_change > 0.0 {
        "bullish"
    } else {
        "bearish"
    };
    let summary = format!(
        "The model has a {sentiment} outlook for {symbol} over the next {} with {}% confidence.",
        prediction.timeframe, prediction.confidence
    );

    let mut factors = BTreeMap::new();
    let mut interpretation = Vec::with_capacity(prediction.factors.len());
    for factor in &prediction.factors {
        let text = interpret(&factor.name, factor.impact, factor.weight, &factor.description);
        factors.insert(
            factor.name.clone(),
            FactorExplanation {
                impact: factor.impact,
                weight: factor.weight,
                description: factor.description.clone(),
                interpretation: text.clone(),
            },
        );
        interpretation.push(Interpretation {
            factor: factor.name.clone(),
            explanation: text,
        });
    }

    Explanation {
        summary,
        factors,
        interpretation,
        caveats: CAVEATS.iter().map(|s| s.to_string()).collect(),
        methodology: Methodology {
            description: METHODOLOGY_DESCRIPTION.to_string(),
            features: METHODOLOGY_FEATURES.iter().map(|s| s.to_string()).collect(),
        },
        timestamp: now,
        analyst: attribution.to_string(),
    }
}

/// One sentence for a factor. Names outside the four known categories get a generic sentence.
pub fn interpret(name: &str, impact: Impact, weight: u32, description: &str) -> String {
    let Some(category) = FactorCategory::from_name(name) else {
        return format!(
            "{name} has a {} impact with {weight}% influence on the prediction. {description}.",
            impact.as_str()
        );
    };

    let lead = match (category, impact) {
        (FactorCategory::Technical, Impact::Positive) => "Technical indicators suggest a bullish trend",
        (FactorCategory::Technical, Impact::Negative) => "Technical indicators suggest a bearish trend",
        (FactorCategory::Technical, Impact::Neutral) => "Technical indicators are showing mixed signals",
        (FactorCategory::Fundamental, Impact::Positive) => "Company fundamentals appear strong",
        (FactorCategory::Fundamental, Impact::Negative) => "Company fundamentals show concerns",
        (FactorCategory::Fundamental, Impact::Neutral) => "Company fundamentals are stable but mixed",
        (FactorCategory::Sentiment, Impact::Positive) => "Market sentiment is favorable",
        (FactorCategory::Sentiment, Impact::Negative) => "Market sentiment is unfavorable",
        (FactorCategory::Sentiment, Impact::Neutral) => "Market sentiment is neutral",
        (FactorCategory::Sector, Impact::Positive) => "The sector is performing well",
        (FactorCategory::Sector, Impact::Negative) => "The sector is underperforming",
        (FactorCategory::Sector, Impact::Neutral) => "The sector is showing average performance",
    };

    format!("{lead} with {weight}% influence on the prediction. {description}.")
}
