//! Static market data: the searchable stock list and the dashboard snapshots.
//!
//! Mover and most-watched tables are stored in display order (movers by descending
//! magnitude), so `limit` is a plain prefix cut.

use crate::domain::market::{IndexQuote, MarketMovers, MarketSummary, MostWatched, Quote, SectorPerformance};
use crate::domain::stock::StockSummary;
use chrono::{DateTime, Utc};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 5;

const STOCKS: [(&str, &str); 10] = [
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("META", "Meta Platforms Inc."),
    ("TSLA", "Tesla Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
    ("V", "Visa Inc."),
    ("JNJ", "Johnson & Johnson"),
];

const INDICES: [(&str, f64, f64, f64); 4] = [
    ("S&P 500", 5923.47, 47.88, 0.81),
    ("Dow Jones", 40654.32, 315.56, 0.78),
    ("Nasdaq", 18732.91, -24.53, -0.13),
    ("Russell 2000", 2354.76, 12.34, 0.53),
];

const SECTORS: [(&str, f64); 10] = [
    ("Technology", 1.2),
    ("Healthcare", 0.8),
    ("Financials", 0.5),
    ("Consumer Discretionary", -0.3),
    ("Communication Services", 0.9),
    ("Industrials", 0.4),
    ("Energy", -0.7),
    ("Utilities", 0.2),
    ("Materials", -0.1),
    ("Real Estate", 0.3),
];

type QuoteRow = (&'static str, &'static str, f64, f64, f64);

const GAINERS: [QuoteRow; 8] = [
    ("XYZ", "XYZ Corp", 134.21, 12.45, 10.23),
    ("ABC", "ABC Inc", 56.78, 4.32, 8.24),
    ("DEF", "DEF Holdings", 89.45, 5.67, 6.77),
    ("GHI", "GHI Tech", 45.67, 2.78, 6.48),
    ("JKL", "JKL Systems", 112.34, 6.23, 5.87),
    ("MNO", "MNO Pharma", 78.90, 4.12, 5.51),
    ("PQR", "PQR Energy", 34.56, 1.78, 5.43),
    ("STU", "STU Networks", 23.45, 1.12, 5.01),
];

const LOSERS: [QuoteRow; 8] = [
    ("AAA", "AAA Industries", 42.63, -8.21, -16.15),
    ("BBB", "BBB Tech", 105.32, -12.45, -10.57),
    ("CCC", "CCC Systems", 27.89, -2.34, -7.74),
    ("DDD", "DDD Electronics", 67.54, -4.87, -6.73),
    ("EEE", "EEE Medical", 89.32, -5.43, -5.73),
    ("FFF", "FFF Retail", 45.67, -2.34, -4.87),
    ("GGG", "GGG Financial", 123.45, -5.67, -4.39),
    ("HHH", "HHH Motors", 56.78, -2.31, -3.91),
];

const WATCHED: [QuoteRow; 8] = [
    ("AAPL", "Apple Inc.", 243.56, 3.21, 1.34),
    ("MSFT", "Microsoft Corp.", 415.67, 5.67, 1.38),
    ("GOOGL", "Alphabet Inc.", 187.32, -1.23, -0.65),
    ("AMZN", "Amazon.com Inc.", 192.45, 2.34, 1.23),
    ("TSLA", "Tesla Inc.", 267.89, -3.45, -1.27),
    ("NVDA", "NVIDIA Corp.", 1245.67, 75.34, 6.43),
    ("META", "Meta Platforms Inc.", 532.78, 7.89, 1.50),
    ("JPM", "JPMorgan Chase & Co.", 210.45, 1.23, 0.59),
];

/// Case-insensitive substring match on symbol or name; an empty query matches everything.
pub fn search_stocks(query: &str, limit: usize) -> Vec<StockSummary> {
    let query = query.trim().to_lowercase();
    STOCKS
        .iter()
        .filter(|(symbol, name)| {
            query.is_empty()
                || symbol.to_lowercase().contains(&query)
                || name.to_lowercase().contains(&query)
        })
        .take(limit)
        .map(|(symbol, name)| StockSummary {
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Catalog name, or "<SYMBOL> Corp" for anything the catalog doesn't list.
pub fn stock_name(symbol: &str) -> String {
    STOCKS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("{symbol} Corp"))
}

pub fn market_summary(now: DateTime<Utc>, attribution: &str) -> MarketSummary {
    MarketSummary {
        indices: INDICES
            .iter()
            .map(|(name, value, change, percent_change)| IndexQuote {
                name: name.to_string(),
                value: *value,
                change: *change,
                percent_change: *percent_change,
            })
            .collect(),
        sector_performance: SECTORS
            .iter()
            .map(|(name, percent_change)| SectorPerformance {
                name: name.to_string(),
                percent_change: *percent_change,
            })
            .collect(),
        market_status: "open".to_string(),
        timestamp: now,
        updated_by: attribution.to_string(),
    }
}

pub fn market_movers(limit: usize, now: DateTime<Utc>, attribution: &str) -> MarketMovers {
    MarketMovers {
        gainers: quotes(&GAINERS, limit),
        losers: quotes(&LOSERS, limit),
        timestamp: now,
        updated_by: attribution.to_string(),
    }
}

pub fn most_watched(limit: usize, now: DateTime<Utc>, attribution: &str) -> MostWatched {
    MostWatched {
        stocks: quotes(&WATCHED, limit),
        timestamp: now,
        updated_by: attribution.to_string(),
    }
}

fn quotes(rows: &[QuoteRow], limit: usize) -> Vec<Quote> {
    rows.iter()
        .take(limit)
        .map(|(symbol, name, price, change, percent_change)| Quote {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price: *price,
            change: *change,
            percent_change: *percent_change,
        })
        .collect()
}
