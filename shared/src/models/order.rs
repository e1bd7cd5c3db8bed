//! Order Model

use super::logistics::LogisticsAssignment;
use serde::{Deserialize, Serialize};

/// Order progress through the marketplace pipeline.
///
/// Transitions move forward only; no reverse edges exist:
///
/// ```text
/// PENDING_CAPACITY ─┬─> READY_FOR_LOGISTICS ──> IN_TRANSIT ──> DELIVERED
///                   └─> NO_CAPACITY_ALT_BUYER
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Awaiting distributor capacity confirmation
    #[default]
    PendingCapacity,
    /// Capacity confirmed, logistics not yet arranged
    ReadyForLogistics,
    /// Capacity declined; listing goes back to other buyers
    NoCapacityAltBuyer,
    /// Logistics scheduled, goods under way
    InTransit,
    /// Goods received, stock decremented
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingCapacity => "PENDING_CAPACITY",
            OrderStatus::ReadyForLogistics => "READY_FOR_LOGISTICS",
            OrderStatus::NoCapacityAltBuyer => "NO_CAPACITY_ALT_BUYER",
            OrderStatus::InTransit => "IN_TRANSIT",
            OrderStatus::Delivered => "DELIVERED",
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// Order entity, one element of the `orders` collection for its entire
/// lifetime (no deletion).
///
/// `total` is fixed at creation as `round(qty_kg * price_per_kg, 2dp)`
/// and never recomputed. `capacity_ok` and `logistics` serialize as
/// explicit nulls until their transitions fill them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub stock_id: String,
    pub buyer_id: String,
    pub qty_kg: f64,
    pub price_per_kg: f64,
    pub total: f64,
    #[serde(default)]
    pub capacity_ok: Option<bool>,
    #[serde(default)]
    pub logistics: Option<LogisticsAssignment>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub stock_id: String,
    pub buyer_id: String,
    pub qty_kg: f64,
}

/// Capacity transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSetCapacity {
    pub ok: bool,
}

/// Logistics transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSetLogistics {
    pub mode: super::logistics::LogisticsMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_format_is_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PendingCapacity).unwrap(),
            "\"PENDING_CAPACITY\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::NoCapacityAltBuyer).unwrap(),
            "\"NO_CAPACITY_ALT_BUYER\""
        );

        let status: OrderStatus = serde_json::from_str("\"IN_TRANSIT\"").unwrap();
        assert_eq!(status, OrderStatus::InTransit);
        assert_eq!(status.as_str(), "IN_TRANSIT");
    }

    #[test]
    fn fresh_order_serializes_explicit_nulls() {
        let order = Order {
            id: "o1".to_string(),
            stock_id: "s1".to_string(),
            buyer_id: "b1".to_string(),
            qty_kg: 5.0,
            price_per_kg: 10.0,
            total: 50.0,
            capacity_ok: None,
            logistics: None,
            status: OrderStatus::PendingCapacity,
            created_at: 0,
        };

        let value = serde_json::to_value(&order).unwrap();
        // 前端依赖显式 null 来渲染待定状态
        assert!(value.get("capacity_ok").unwrap().is_null());
        assert!(value.get("logistics").unwrap().is_null());
    }

    #[test]
    fn default_status_is_pending_capacity() {
        assert_eq!(OrderStatus::default(), OrderStatus::PendingCapacity);
        assert!(!OrderStatus::default().is_delivered());
        assert!(OrderStatus::Delivered.is_delivered());
    }
}
