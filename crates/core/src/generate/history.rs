use crate::domain::history::HistoricalSeries;
use crate::generate::details::stock_details;
use crate::seed;
use crate::timeframe::SeriesShape;
use anyhow::Context;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::collections::HashSet;

// Per-step drift of the walk; its sign follows the day's move.
const TREND: f64 = 0.02;
const STEP_STD_DEV: f64 = 0.02;
// The walk is shifted so its final factor is this value.
const ANCHOR_FACTOR: f64 = 2.0;
// An upward walk can shift early factors to or below zero. Floor them at 1% of the current
// price.
const MIN_FACTOR: f64 = ANCHOR_FACTOR * 0.01;

/// Synthetic price path ending exactly at the symbol's current price.
pub fn generate_history(
    symbol: &str,
    timeframe: &str,
    now: DateTime<Utc>,
    attribution: &str,
) -> anyhow::Result<HistoricalSeries> {
    let details = stock_details(symbol, now)?;
    let shape = SeriesShape::for_label(timeframe);
    let timestamps = shape.timestamps(now);

    let trend = if details.percent_change > 0.0 {
        TREND
    } else {
        -TREND
    };
    let mut rng = seed::rng_for(symbol);
    let prices = anchored_walk(&mut rng, shape.points, trend, details.price)?;
    let labels = axis_labels(&timestamps, shape.label_format, shape.sparse_labels);

    tracing::debug!(
        symbol,
        timeframe,
        points = shape.points,
        current_price = details.price,
        "generated historical series"
    );

    Ok(HistoricalSeries {
        symbol: symbol.to_string(),
        timeframe: timeframe.to_string(),
        labels,
        prices,
        timestamps,
        updated_at: now,
        updated_by: attribution.to_string(),
    })
}

/// Cumulative sum of `points` normal steps, shifted so the final factor is 2 and scaled so
/// the final price is `current_price`. Earlier prices never drop below 1% of `current_price`.
pub fn anchored_walk<R: Rng + ?Sized>(
    rng: &mut R,
    points: usize,
    trend: f64,
    current_price: f64,
) -> anyhow::Result<Vec<f64>> {
    let step = Normal::new(trend, STEP_STD_DEV).context("invalid walk step distribution")?;

    let mut walk = Vec::with_capacity(points);
    let mut total = 0.0;
    for _ in 0..points {
        total += step.sample(rng);
        walk.push(total);
    }

    let Some(&last) = walk.last() else {
        return Ok(Vec::new());
    };
    let scale = current_price / ANCHOR_FACTOR;
    let mut floored = 0usize;
    let prices: Vec<f64> = walk
        .iter()
        .map(|w| {
            let factor = ANCHOR_FACTOR + w - last;
            if factor < MIN_FACTOR {
                floored += 1;
                MIN_FACTOR * scale
            } else {
                factor * scale
            }
        })
        .collect();

    if floored > 0 {
        tracing::debug!(floored, points, "walk factors floored");
    }
    Ok(prices)
}

/// Formats each timestamp; with `sparse`, only the first occurrence of each label is kept and
/// the rest are blanked.
pub fn axis_labels(timestamps: &[DateTime<Utc>], format: &str, sparse: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    timestamps
        .iter()
        .map(|ts| {
            let label = ts.format(format).to_string();
            if !sparse || seen.insert(label.clone()) {
                label
            } else {
                String::new()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeframe::Timeframe;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_close(a: f64, b: f64) {
        assert!(((a - b) / b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn lengths_match_point_count_for_every_timeframe() {
        let now = Utc::now();
        for (label, tf) in [
            ("1d", Timeframe::OneDay),
            ("1w", Timeframe::OneWeek),
            ("1m", Timeframe::OneMonth),
            ("3m", Timeframe::ThreeMonths),
            ("1y", Timeframe::OneYear),
            ("all", Timeframe::All),
        ] {
            let series = generate_history("AAPL", label, now, "test").unwrap();
            let expected = SeriesShape::for_timeframe(tf).points;
            assert_eq!(series.labels.len(), expected, "{label}");
            assert_eq!(series.prices.len(), expected);
            assert_eq!(series.timestamps.len(), expected);
        }
    }

    #[test]
    fn last_price_matches_stock_details() {
        let now = Utc::now();
        for symbol in ["AAPL", "NVDA", "IBM", "QWERT", "V"] {
            let details = stock_details(symbol, now).unwrap();
            for tf in ["1d", "1w", "1m", "3m", "1y", "all", "bogus"] {
                let series = generate_history(symbol, tf, now, "test").unwrap();
                assert_close(*series.prices.last().unwrap(), details.price);
            }
        }
    }

    #[test]
    fn unknown_timeframe_falls_back_to_month_shape() {
        let series = generate_history("MSFT", "10y", Utc::now(), "test").unwrap();
        assert_eq!(series.timeframe, "10y");
        assert_eq!(series.prices.len(), 30);
        assert!(series.labels.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn walk_is_reproducible_per_symbol() {
        let now = Utc::now();
        let a = generate_history("JPM", "3m", now, "test").unwrap();
        let b = generate_history("JPM", "3m", now, "test").unwrap();
        assert_eq!(a.prices, b.prices);
    }

    #[test]
    fn anchored_walk_ends_at_price() {
        for seed in 0..100u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let prices = anchored_walk(&mut rng, 52, -TREND, 87.5).unwrap();
            assert_eq!(prices.len(), 52);
            assert_close(prices[51], 87.5);
        }
    }

    #[test]
    fn strong_upward_walks_stay_positive() {
        for seed in 0..2_000u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let prices = anchored_walk(&mut rng, 90, TREND, 243.56).unwrap();
            assert!(
                prices.iter().all(|p| *p >= 243.56 * 0.01 - 1e-9),
                "seed {seed}: {:?}",
                prices.iter().cloned().fold(f64::INFINITY, f64::min)
            );
            assert_close(prices[89], 243.56);
        }
    }

    #[test]
    fn three_month_series_never_goes_negative() {
        let now = Utc::now();
        for symbol in ["AAK", "AAPL", "ZZZ", "QQQ", "MSFT"] {
            let series = generate_history(symbol, "3m", now, "test").unwrap();
            let price = stock_details(symbol, now).unwrap().price;
            assert!(series.prices.iter().all(|p| *p > 0.0), "{symbol}");
            assert_close(*series.prices.last().unwrap(), price);
        }
    }

    #[test]
    fn anchored_walk_with_no_points_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(anchored_walk(&mut rng, 0, TREND, 10.0).unwrap().is_empty());
    }

    #[test]
    fn upward_trend_starts_below_current_price() {
        // Ninety steps of +0.02 drift dominate the noise.
        let mut rng = StdRng::seed_from_u64(7);
        let prices = anchored_walk(&mut rng, 90, TREND, 100.0).unwrap();
        assert!(prices[0] < prices[89]);
    }

    #[test]
    fn sparse_labels_keep_first_of_each_week() {
        // 2026-01-04 is a Sunday, so %U rolls over every seven days from there.
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 30, 0).unwrap();
        let timestamps: Vec<_> = (0..10).map(|d| start + chrono::Duration::days(d)).collect();
        let labels = axis_labels(&timestamps, "Week %U", true);
        assert_eq!(labels[0], "Week 00");
        assert_eq!(labels[1], "");
        assert_eq!(labels[2], "");
        assert_eq!(labels[3], "Week 01");
        assert!(labels[4..].iter().all(|l| l.is_empty()));
    }

    #[test]
    fn dense_labels_repeat() {
        let start = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        let timestamps: Vec<_> = (0..3).map(|d| start + chrono::Duration::days(d)).collect();
        assert_eq!(axis_labels(&timestamps, "%b", false), vec!["May", "May", "May"]);
    }

    #[test]
    fn one_month_series_has_sparse_labels() {
        let series = generate_history("GOOGL", "1m", Utc::now(), "test").unwrap();
        let named: Vec<&String> = series.labels.iter().filter(|l| !l.is_empty()).collect();
        assert!((4..=7).contains(&named.len()), "{named:?}");
        assert!(!series.labels[0].is_empty());
    }
}
