use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Literal prices for the tickers the demo data is built around. Every other symbol gets a
// seeded pseudo-random base price.
const KNOWN_BASE_PRICES: [(&str, f64); 7] = [
    ("AAPL", 243.56),
    ("MSFT", 415.67),
    ("GOOGL", 187.32),
    ("AMZN", 192.45),
    ("META", 532.78),
    ("TSLA", 267.89),
    ("NVDA", 1245.67),
];

/// Sum of the symbol's code points.
pub fn symbol_seed(symbol: &str) -> u64 {
    symbol.chars().map(|c| c as u64).sum()
}

/// A fresh generator for one generation call. Two calls with the same symbol replay the same
/// sequence of draws.
pub fn rng_for(symbol: &str) -> StdRng {
    StdRng::seed_from_u64(symbol_seed(symbol))
}

pub fn known_base_price(symbol: &str) -> Option<f64> {
    KNOWN_BASE_PRICES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, price)| *price)
}

/// Literal price for known tickers; otherwise an integer in [50, 500) plus a fractional part,
/// both drawn from `rng`. Known tickers consume no draws.
pub fn base_price<R: Rng + ?Sized>(symbol: &str, rng: &mut R) -> f64 {
    if let Some(price) = known_base_price(symbol) {
        return price;
    }
    rng.gen_range(50..500) as f64 + rng.gen::<f64>()
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_sum_of_code_points() {
        assert_eq!(symbol_seed("A"), 65);
        assert_eq!(symbol_seed("AAPL"), 65 + 65 + 80 + 76);
        assert_eq!(symbol_seed(""), 0);
    }

    #[test]
    fn anagrams_share_a_seed() {
        assert_eq!(symbol_seed("ABC"), symbol_seed("CBA"));
    }

    #[test]
    fn known_ticker_ignores_seed() {
        let mut rng = rng_for("ZZZ");
        assert_eq!(base_price("AAPL", &mut rng), 243.56);
        assert_eq!(base_price("NVDA", &mut rng), 1245.67);
    }

    #[test]
    fn unknown_ticker_price_is_reproducible_and_in_range() {
        let a = base_price("XOMX", &mut rng_for("XOMX"));
        let b = base_price("XOMX", &mut rng_for("XOMX"));
        assert_eq!(a, b);
        assert!((50.0..501.0).contains(&a), "price out of range: {a}");
    }

    #[test]
    fn rounds_to_requested_decimals() {
        assert_eq!(round_to(1.005_1, 2), 1.01);
        assert_eq!(round_to(-2.345_6, 1), -2.3);
    }
}
