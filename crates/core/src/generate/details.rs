use crate::domain::stock::{AnalystRatings, StockDetails};
use crate::market::stock_name;
use crate::seed::{self, round_to};
use anyhow::Context;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand_distr::{Distribution, Normal};

// Daily move in percent.
const DAILY_CHANGE_MEAN: f64 = 0.0;
const DAILY_CHANGE_STD_DEV: f64 = 2.0;

pub fn stock_details(symbol: &str, now: DateTime<Utc>) -> anyhow::Result<StockDetails> {
    let mut rng = seed::rng_for(symbol);
    let price = seed::base_price(symbol, &mut rng);

    let daily = Normal::new(DAILY_CHANGE_MEAN, DAILY_CHANGE_STD_DEV)
        .context("invalid daily change distribution")?;
    let percent_change = daily.sample(&mut rng);
    let change = price * percent_change / 100.0;

    let market_cap = round_to(price * rng.gen_range(10..100) as f64 * 1e6 / 1e12, 2);
    let volume = rng.gen_range(1..100) as f64;
    let avg_volume = rng.gen_range(1..100) as f64;
    let pe = round_to(rng.gen_range(10..40) as f64 + rng.gen::<f64>(), 1);
    let eps = round_to(price / rng.gen_range(10..40) as f64, 2);
    let dividend = round_to(rng.gen::<f64>() * 3.0, 2);
    let high_52w = round_to(price * (1.0 + rng.gen::<f64>() * 0.3), 2);
    let low_52w = round_to(price * (1.0 - rng.gen::<f64>() * 0.3), 2);
    let open = round_to(price - change * rng.gen::<f64>(), 2);
    let previous_close = round_to(price - change, 2);

    let analyst = AnalystRatings {
        buy: rng.gen_range(5..30),
        hold: rng.gen_range(1..15),
        sell: rng.gen_range(0..5),
    };

    tracing::debug!(symbol, price, percent_change, "generated stock details");

    Ok(StockDetails {
        symbol: symbol.to_string(),
        name: stock_name(symbol),
        price,
        change,
        percent_change,
        market_cap,
        volume,
        avg_volume,
        pe,
        eps,
        dividend,
        high_52w,
        low_52w,
        open,
        previous_close,
        timestamp: now,
        analyst,
    })
}
