//! 市场指标汇总
//!
//! 对订单和库存集合的只读聚合，为仪表盘提供 KPI。

use std::collections::BTreeMap;

use serde::Serialize;

use shared::models::LogisticsMode;

use crate::store::{MarketStore, StorageResult};
use crate::utils::money::round2;

/// 单作物挂牌均价
#[derive(Debug, Clone, Serialize)]
pub struct CropAverage {
    pub crop: String,
    pub avg_price: f64,
}

/// KPI 汇总报表
#[derive(Debug, Clone, Serialize)]
pub struct KpiReport {
    /// 已送达总公斤数
    pub kg_delivered: f64,
    /// 已送达订单数
    pub orders_delivered: usize,
    /// 买家自提的物流安排数
    pub buyer_arranged_logistics: usize,
    /// 外部快递的物流安排数
    pub external_courier: usize,
    /// 已送达订单总金额（两位小数）
    pub total_revenue: f64,
    /// 按作物聚合的挂牌均价，作物名升序
    pub average_prices_by_crop: Vec<CropAverage>,
}

/// 汇总全库指标
pub fn kpis(store: &MarketStore) -> StorageResult<KpiReport> {
    let orders = store.orders()?;
    let stock = store.stock()?;

    let delivered: Vec<_> = orders.iter().filter(|o| o.status.is_delivered()).collect();

    let kg_delivered: f64 = delivered.iter().map(|o| o.qty_kg).sum();
    let total_revenue = round2(delivered.iter().map(|o| o.total).sum());

    // 物流模式计数覆盖全部订单，不限已送达
    let mut buyer_arranged = 0;
    let mut external = 0;
    for order in &orders {
        if let Some(assignment) = &order.logistics {
            match assignment.mode {
                LogisticsMode::Buyer => buyer_arranged += 1,
                LogisticsMode::External => external += 1,
                LogisticsMode::Other => {}
            }
        }
    }

    // 按作物聚合挂牌均价，含已售罄的挂牌
    let mut by_crop: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for listing in &stock {
        let slot = by_crop.entry(listing.crop.clone()).or_insert((0.0, 0));
        slot.0 += listing.price_per_kg;
        slot.1 += 1;
    }

    let average_prices_by_crop = by_crop
        .into_iter()
        .map(|(crop, (sum, count))| CropAverage {
            crop,
            avg_price: round2(sum / count as f64),
        })
        .collect();

    Ok(KpiReport {
        kg_delivered,
        orders_delivered: delivered.len(),
        buyer_arranged_logistics: buyer_arranged,
        external_courier: external,
        total_revenue,
        average_prices_by_crop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{LogisticsAssignment, Order, OrderStatus, StockListing};

    fn order(id: &str, qty_kg: f64, total: f64, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            stock_id: "s_1".to_string(),
            buyer_id: "u_buyer".to_string(),
            qty_kg,
            price_per_kg: 0.0,
            total,
            capacity_ok: Some(true),
            logistics: None,
            status,
            created_at: 0,
        }
    }

    fn listing(crop: &str, price: f64) -> StockListing {
        StockListing {
            id: shared::util::new_id(),
            farmer_id: "u_farmer".to_string(),
            crop: crop.to_string(),
            variety: None,
            qty_kg: 100.0,
            price_per_kg: price,
            location: None,
            harvest_date: None,
            status: "available".to_string(),
        }
    }

    #[test]
    fn empty_store_yields_zeroed_report() {
        let store = MarketStore::open_in_memory().unwrap();

        let report = kpis(&store).unwrap();

        assert_eq!(report.kg_delivered, 0.0);
        assert_eq!(report.orders_delivered, 0);
        assert_eq!(report.total_revenue, 0.0);
        assert!(report.average_prices_by_crop.is_empty());
    }

    #[test]
    fn delivered_orders_drive_volume_and_revenue() {
        let store = MarketStore::open_in_memory().unwrap();
        store
            .put_orders(&[
                order("o_1", 100.0, 2550.0, OrderStatus::Delivered),
                order("o_2", 300.0, 4725.0, OrderStatus::Delivered),
                order("o_3", 200.0, 3600.0, OrderStatus::InTransit),
            ])
            .unwrap();

        let report = kpis(&store).unwrap();

        assert_eq!(report.kg_delivered, 400.0);
        assert_eq!(report.orders_delivered, 2);
        assert_eq!(report.total_revenue, 7275.0);
    }

    #[test]
    fn logistics_modes_are_counted_across_all_orders() {
        let store = MarketStore::open_in_memory().unwrap();

        let mut in_transit = order("o_1", 10.0, 100.0, OrderStatus::InTransit);
        in_transit.logistics = Some(LogisticsAssignment::arrange(
            "o_1",
            LogisticsMode::External,
            10.0,
        ));

        let mut delivered = order("o_2", 10.0, 100.0, OrderStatus::Delivered);
        delivered.logistics = Some(LogisticsAssignment::arrange(
            "o_2",
            LogisticsMode::Buyer,
            10.0,
        ));

        store.put_orders(&[in_transit, delivered]).unwrap();

        let report = kpis(&store).unwrap();

        assert_eq!(report.buyer_arranged_logistics, 1);
        assert_eq!(report.external_courier, 1);
    }

    #[test]
    fn crop_averages_are_sorted_and_rounded() {
        let store = MarketStore::open_in_memory().unwrap();
        store
            .put_stock(&[
                listing("Tomatoes", 25.5),
                listing("Maize", 15.0),
                listing("Tomatoes", 20.0),
                listing("Maize", 16.0),
            ])
            .unwrap();

        let report = kpis(&store).unwrap();

        assert_eq!(report.average_prices_by_crop.len(), 2);
        assert_eq!(report.average_prices_by_crop[0].crop, "Maize");
        assert_eq!(report.average_prices_by_crop[0].avg_price, 15.5);
        assert_eq!(report.average_prices_by_crop[1].crop, "Tomatoes");
        assert_eq!(report.average_prices_by_crop[1].avg_price, 22.75);
    }
}
