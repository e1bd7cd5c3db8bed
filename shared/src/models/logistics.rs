//! Logistics Assignment Model

use serde::{Deserialize, Serialize};

/// Goodwill discount when the buyer collects the goods themselves.
pub const BUYER_PICKUP_DISCOUNT: f64 = 0.05;

/// Minimum charge for the external courier.
pub const EXTERNAL_COST_FLOOR: f64 = 200.0;

/// Per-kilogram charge for the external courier.
pub const EXTERNAL_COST_PER_KG: f64 = 0.5;

/// 物流方式
///
/// 线上格式是自由字符串，未知值一律按 [`LogisticsMode::Other`] 处理。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum LogisticsMode {
    /// 买家自提（享受折扣）
    Buyer,
    /// 第三方快递（按重量计费，有最低价）
    External,
    /// 其他：无折扣、无费用、无承运商
    #[default]
    Other,
}

impl From<String> for LogisticsMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "buyer" => LogisticsMode::Buyer,
            "external" => LogisticsMode::External,
            _ => LogisticsMode::Other,
        }
    }
}

impl LogisticsMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogisticsMode::Buyer => "buyer",
            LogisticsMode::External => "external",
            LogisticsMode::Other => "other",
        }
    }
}

/// Assignment state. Only one value is ever written; delivery does not
/// touch the assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogisticsStatus {
    #[default]
    Scheduled,
}

/// The delivery arrangement attached to an order.
///
/// Created exactly once per `set_logistics` call and embedded in the
/// order record; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogisticsAssignment {
    pub id: String,
    pub order_id: String,
    pub mode: LogisticsMode,
    /// Fraction off the order total (0.05 for buyer pickup)
    pub discount: f64,
    /// Courier charge; 0 for buyer pickup
    pub cost: f64,
    pub carrier: Option<String>,
    pub status: LogisticsStatus,
}

impl LogisticsAssignment {
    /// Build the assignment for an order under the given mode.
    pub fn arrange(order_id: &str, mode: LogisticsMode, qty_kg: f64) -> Self {
        let (discount, cost, carrier) = match mode {
            LogisticsMode::Buyer => (BUYER_PICKUP_DISCOUNT, 0.0, None),
            LogisticsMode::External => (
                0.0,
                f64::max(EXTERNAL_COST_FLOOR, qty_kg * EXTERNAL_COST_PER_KG),
                Some("External Courier".to_string()),
            ),
            LogisticsMode::Other => (0.0, 0.0, None),
        };

        Self {
            id: crate::util::new_id(),
            order_id: order_id.to_string(),
            mode,
            discount,
            cost,
            carrier,
            status: LogisticsStatus::Scheduled,
        }
    }
}
