//! Buyer Demand Model

use serde::{Deserialize, Serialize};

/// A buyer's open request for a crop.
///
/// Read-only to the order core. Matching treats `qty_needed <= 0` as
/// closed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemandEntry {
    pub id: String,
    #[serde(default)]
    pub buyer_id: String,
    pub crop: String,
    #[serde(default)]
    pub qty_needed: f64,
    #[serde(default)]
    pub created_at: i64,
}

/// Create demand payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandCreate {
    pub buyer_id: String,
    pub crop: String,
    pub qty_needed: f64,
}

impl DemandEntry {
    /// Still worth matching against?
    pub fn is_open(&self) -> bool {
        self.qty_needed > 0.0
    }
}
