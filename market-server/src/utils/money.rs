//! 金额舍入
//!
//! 货币金额统一保留两位小数，中点远离零舍入。
//! 通过 [`rust_decimal`] 做十进制运算，避免二进制浮点在
//! 0.1 + 0.2 这类算式上的表示误差进入持久化数据。

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// 保留两位小数（中点远离零）
///
/// 非有限输入（NaN / 无穷）原样返回，由调用方的业务规则兜底。
pub fn round2(amount: f64) -> f64 {
    Decimal::from_f64(amount)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(amount)
}
