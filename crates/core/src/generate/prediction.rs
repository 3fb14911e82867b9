use crate::domain::prediction::{Factor, FactorCategory, Impact, PredictionResult, Recommendation};
use crate::seed::{self, round_to};
use anyhow::Context;
use chrono::{DateTime, Utc};
use rand::distributions::WeightedIndex;
use rand::Rng;
use rand_distr::{Distribution, Normal};

// Predicted move in percent; deliberately skewed bullish.
const CHANGE_MEAN: f64 = 8.0;
const CHANGE_STD_DEV: f64 = 4.0;
// Confidence is drawn from [MIN, MAX).
const CONFIDENCE_MIN: u32 = 60;
const CONFIDENCE_MAX: u32 = 95;

/// A factor whose impact follows the direction of the predicted move.
struct DirectionalProfile {
    category: FactorCategory,
    /// Weight is drawn from `[weight_min, weight_max)`.
    weight_min: u32,
    weight_max: u32,
    /// Chance that the impact matches the move's polarity instead of being neutral.
    match_probability: f64,
    /// (matching, neutral) descriptions for an upward move.
    bullish: (&'static str, &'static str),
    /// (matching, neutral) descriptions for a downward move.
    bearish: (&'static str, &'static str),
}

const DIRECTIONAL: [DirectionalProfile; 3] = [
    DirectionalProfile {
        category: FactorCategory::Technical,
        weight_min: 25,
        weight_max: 40,
        match_probability: 0.8,
        bullish: (
            "Bullish patterns on multiple timeframes",
            "Mixed technical signals with moderate upside potential",
        ),
        bearish: (
            "Bearish patterns indicating downward momentum",
            "Mixed technical signals with cautious outlook",
        ),
    },
    DirectionalProfile {
        category: FactorCategory::Fundamental,
        weight_min: 20,
        weight_max: 35,
        match_probability: 0.7,
        bullish: (
            "Strong earnings growth and healthy balance sheet",
            "Steady financial performance with average growth metrics",
        ),
        bearish: (
            "Declining revenue growth and margin pressure",
            "Stable financials but facing industry headwinds",
        ),
    },
    DirectionalProfile {
        category: FactorCategory::Sentiment,
        weight_min: 15,
        weight_max: 25,
        match_probability: 0.75,
        bullish: (
            "Positive news and social media sentiment",
            "Mixed media coverage with neutral social sentiment",
        ),
        bearish: (
            "Negative news cycle and bearish social indicators",
            "Limited media coverage with neutral sentiment",
        ),
    },
];

// The sector factor takes whatever weight is left, so the drawn weights must never reach 100.
const MAX_DIRECTIONAL_WEIGHT: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < DIRECTIONAL.len() {
        total += DIRECTIONAL[i].weight_max - 1;
        i += 1;
    }
    total
};
const _: () = assert!(
    MAX_DIRECTIONAL_WEIGHT < 100,
    "directional factor weights leave no room for the sector factor"
);

// Independent of the move's direction.
const SECTOR_OUTCOMES: [(Impact, f64, &str); 3] = [
    (Impact::Positive, 0.4, "Sector outperforming the broader market"),
    (Impact::Neutral, 0.4, "Sector showing mixed signals"),
    (Impact::Negative, 0.2, "Sector underperforming broader market"),
];

pub fn generate_prediction(
    symbol: &str,
    timeframe: &str,
    now: DateTime<Utc>,
    attribution: &str,
) -> anyhow::Result<PredictionResult> {
    let mut rng = seed::rng_for(symbol);
    let current_price = seed::base_price(symbol, &mut rng);

    let change = Normal::new(CHANGE_MEAN, CHANGE_STD_DEV)
        .context("invalid predicted change distribution")?;
    let percent_change = change.sample(&mut rng);
    let predicted_price = round_to(current_price * (1.0 + percent_change / 100.0), 2);

    let confidence = rng.gen_range(CONFIDENCE_MIN..CONFIDENCE_MAX);
    let recommendation = Recommendation::from_signal(percent_change, confidence);

    let factors = generate_factors(&mut rng, percent_change > 0.0)?;

    tracing::debug!(
        symbol,
        timeframe,
        percent_change,
        confidence,
        ?recommendation,
        "generated prediction"
    );

    Ok(PredictionResult {
        symbol: symbol.to_string(),
        current_price,
        predicted_price,
        percent_change: round_to(percent_change, 2),
        confidence,
        timeframe: timeframe.to_string(),
        recommendation,
        factors,
        generated_at: now,
        generated_by: attribution.to_string(),
        timestamp: now,
        updated_by: attribution.to_string(),
    })
}

/// Technical, fundamental and sentiment factors followed by the sector factor, whose weight
/// completes the total to 100.
pub fn generate_factors<R: Rng + ?Sized>(rng: &mut R, bullish: bool) -> anyhow::Result<Vec<Factor>> {
    let mut factors = Vec::with_capacity(DIRECTIONAL.len() + 1);
    for profile in &DIRECTIONAL {
        factors.push(directional_factor(rng, profile, bullish));
    }

    let drawn: u32 = factors.iter().map(|f| f.weight).sum();
    let sector_weight = 100 - drawn;

    let outcome = WeightedIndex::new(SECTOR_OUTCOMES.iter().map(|(_, p, _)| *p))
        .context("invalid sector outcome weights")?;
    let (impact, _, description) = SECTOR_OUTCOMES[outcome.sample(rng)];

    factors.push(Factor {
        name: FactorCategory::Sector.name().to_string(),
        impact,
        weight: sector_weight,
        description: description.to_string(),
    });

    Ok(factors)
}

fn directional_factor<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DirectionalProfile,
    bullish: bool,
) -> Factor {
    let weight = rng.gen_range(profile.weight_min..profile.weight_max);
    let matches = rng.gen_bool(profile.match_probability);

    let (polarity, (matching, neutral)) = if bullish {
        (Impact::Positive, profile.bullish)
    } else {
        (Impact::Negative, profile.bearish)
    };
    let (impact, description) = if matches {
        (polarity, matching)
    } else {
        (Impact::Neutral, neutral)
    };

    Factor {
        name: profile.category.name().to_string(),
        impact,
        weight,
        description: description.to_string(),
    }
}
