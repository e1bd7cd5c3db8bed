//! 需求匹配
//!
//! 为挂牌库存筛选同作物且数量未满足的买家需求。

use shared::models::{DemandEntry, StockListing};

use crate::store::{MarketStore, StorageResult};

/// 找出与挂牌库存匹配的全部开放需求
///
/// 匹配条件：作物相同且 `qty_needed > 0`。结果保持需求在
/// 存储中的原始顺序。
pub fn find_demand_matches(
    store: &MarketStore,
    listing: &StockListing,
) -> StorageResult<Vec<DemandEntry>> {
    let demand = store.demand()?;

    Ok(demand
        .into_iter()
        .filter(|entry| entry.crop == listing.crop && entry.is_open())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, crop: &str, qty_needed: f64) -> DemandEntry {
        DemandEntry {
            id: id.to_string(),
            buyer_id: "u_buyer".to_string(),
            crop: crop.to_string(),
            qty_needed,
            created_at: 0,
        }
    }

    fn tomato_listing() -> StockListing {
        StockListing {
            id: "s_1".to_string(),
            farmer_id: "u_farmer".to_string(),
            crop: "Tomatoes".to_string(),
            variety: None,
            qty_kg: 100.0,
            price_per_kg: 20.0,
            location: None,
            harvest_date: None,
            status: "available".to_string(),
        }
    }

    #[test]
    fn matches_keep_storage_order() {
        let store = MarketStore::open_in_memory().unwrap();
        store
            .put_demand(&[
                entry("d_1", "Tomatoes", 50.0),
                entry("d_2", "Maize", 200.0),
                entry("d_3", "Tomatoes", 80.0),
            ])
            .unwrap();

        let matches = find_demand_matches(&store, &tomato_listing()).unwrap();

        let ids: Vec<&str> = matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["d_1", "d_3"]);
    }

    #[test]
    fn satisfied_demand_is_excluded() {
        let store = MarketStore::open_in_memory().unwrap();
        store
            .put_demand(&[
                entry("d_1", "Tomatoes", 0.0),
                entry("d_2", "Tomatoes", -5.0),
                entry("d_3", "Tomatoes", 1.0),
            ])
            .unwrap();

        let matches = find_demand_matches(&store, &tomato_listing()).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "d_3");
    }

    #[test]
    fn no_matching_crop_yields_empty() {
        let store = MarketStore::open_in_memory().unwrap();
        store.put_demand(&[entry("d_1", "Maize", 100.0)]).unwrap();

        let matches = find_demand_matches(&store, &tomato_listing()).unwrap();
        assert!(matches.is_empty());
    }
}
