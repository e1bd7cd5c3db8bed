//! 报价建议
//!
//! 以同作物全部挂牌的均价为基准评估报价：偏离超过 15% 的报价
//! 建议对齐到均价，带内报价原样返回。

use serde::Serialize;

use crate::store::{MarketStore, StorageResult};
use crate::utils::money::round2;

/// 允许偏离市场均价的相对范围 (±15%)
pub const PRICE_BAND: f64 = 0.15;

/// 报价建议结果
#[derive(Debug, Clone, Serialize)]
pub struct PriceSuggestion {
    pub suggested: f64,
    pub reason: String,
}

/// 某作物全部挂牌的均价，取整到最近的整数
///
/// 没有匹配挂牌时返回 `None`。
pub fn average_price(store: &MarketStore, crop: &str) -> StorageResult<Option<f64>> {
    let stock = store.stock()?;

    let prices: Vec<f64> = stock
        .iter()
        .filter(|listing| listing.crop == crop)
        .map(|listing| listing.price_per_kg)
        .collect();

    if prices.is_empty() {
        return Ok(None);
    }

    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    Ok(Some(mean.round()))
}

/// 评估一个候选报价
pub fn suggest_price(
    store: &MarketStore,
    price: f64,
    crop: &str,
) -> StorageResult<PriceSuggestion> {
    let average = average_price(store, crop)?;

    // 零均价等同于没有历史，避免除零把非有限值带进建议价
    let Some(avg) = average.filter(|a| *a != 0.0) else {
        return Ok(PriceSuggestion {
            suggested: price,
            reason: "No history".to_string(),
        });
    };

    let deviation = (price - avg) / avg;

    if deviation.abs() > PRICE_BAND {
        Ok(PriceSuggestion {
            suggested: round2(avg),
            reason: format!("Aligned to market avg {avg}"),
        })
    } else {
        Ok(PriceSuggestion {
            suggested: price,
            reason: "Within band".to_string(),
        })
    }
}
