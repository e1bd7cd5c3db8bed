//! 定价与匹配
//!
//! 对库存和需求集合的只读查询：
//!
//! - [`advisor`] - 市场均价与报价建议
//! - [`matcher`] - 为挂牌库存寻找匹配的买家需求

pub mod advisor;
pub mod matcher;

pub use advisor::{PriceSuggestion, average_price, suggest_price};
pub use matcher::find_demand_matches;
