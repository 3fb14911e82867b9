use crate::domain::prediction::Impact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    pub summary: String,
    /// Keyed by factor name.
    pub factors: BTreeMap<String, FactorExplanation>,
    /// Same order as the prediction's factors.
    pub interpretation: Vec<Interpretation>,
    pub caveats: Vec<String>,
    pub methodology: Methodology,
    pub timestamp: DateTime<Utc>,
    pub analyst: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorExplanation {
    pub impact: Impact,
    pub weight: u32,
    pub description: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub factor: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Methodology {
    pub description: String,
    pub features: Vec<String>,
}
