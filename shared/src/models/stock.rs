//! Stock Listing Model

use serde::{Deserialize, Serialize};

/// A farmer's offer for one crop lot.
///
/// `qty_kg` is mutated in exactly one place: delivery confirmation
/// decrements it, floored at zero. Every other field belongs to the
/// farmer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockListing {
    pub id: String,
    #[serde(default)]
    pub farmer_id: String,
    pub crop: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(default)]
    pub qty_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// ISO date string, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<String>,
    /// Asking price per kg; records stored without one read back as 0
    #[serde(default)]
    pub price_per_kg: f64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "available".to_string()
}

/// Create stock payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockCreate {
    pub farmer_id: String,
    pub crop: String,
    pub variety: Option<String>,
    pub qty_kg: f64,
    pub location: Option<String>,
    pub harvest_date: Option<String>,
    pub price_per_kg: f64,
}

/// Update stock payload
///
/// Quantity is deliberately absent: `qty_kg` moves only through delivery
/// confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockUpdate {
    pub variety: Option<String>,
    pub location: Option<String>,
    pub harvest_date: Option<String>,
    pub price_per_kg: Option<f64>,
    pub status: Option<String>,
}

impl StockListing {
    /// Anything left to sell?
    pub fn has_quantity(&self) -> bool {
        self.qty_kg > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let json = r#"{"id":"s1","crop":"Tomatoes"}"#;
        let listing: StockListing = serde_json::from_str(json).unwrap();

        assert_eq!(listing.farmer_id, "");
        assert_eq!(listing.qty_kg, 0.0);
        assert_eq!(listing.price_per_kg, 0.0);
        assert_eq!(listing.status, "available");
        assert!(listing.variety.is_none());
        assert!(!listing.has_quantity());
    }

    #[test]
    fn round_trips_through_json() {
        let listing = StockListing {
            id: "s_001".to_string(),
            farmer_id: "u_farmer".to_string(),
            crop: "Tomatoes".to_string(),
            variety: Some("Roma".to_string()),
            qty_kg: 500.0,
            location: Some("North".to_string()),
            harvest_date: Some("2025-07-01".to_string()),
            price_per_kg: 25.5,
            status: "available".to_string(),
        };

        let json = serde_json::to_string(&listing).unwrap();
        let back: StockListing = serde_json::from_str(&json).unwrap();
        assert_eq!(back, listing);
    }
}
