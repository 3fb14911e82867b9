pub mod explanation;
pub mod history;
pub mod market;
pub mod prediction;
pub mod stock;
