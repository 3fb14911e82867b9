//! Synthetic data generators. Every entry point builds its own generator from the symbol's
//! seed, so results depend only on the arguments.

pub mod details;
pub mod history;
pub mod prediction;

pub use details::stock_details;
pub use history::generate_history;
pub use prediction::generate_prediction;
