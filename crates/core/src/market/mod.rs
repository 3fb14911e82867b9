pub mod catalog;

pub use catalog::{market_movers, market_summary, most_watched, search_stocks, stock_name};
