//! 订单全流程集成测试
//!
//! 使用真实的文件型存储走完整个生命周期：挂牌 → 下单 → 产能确认 →
//! 物流安排 → 送达确认，并核对库存扣减、会话持久化与 KPI。

use market_server::analytics;
use market_server::auth::AuthService;
use market_server::pricing;
use market_server::{MarketStore, OrdersManager};
use shared::models::{LogisticsMode, OrderStatus, StockListing, UserRole};
use shared::util::new_id;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> MarketStore {
    MarketStore::open(dir.path().join("market.redb")).unwrap()
}

fn listing(crop: &str, qty_kg: f64, price_per_kg: f64) -> StockListing {
    StockListing {
        id: new_id(),
        farmer_id: "u_farmer".to_string(),
        crop: crop.to_string(),
        variety: None,
        qty_kg,
        price_per_kg,
        location: None,
        harvest_date: None,
        status: "available".to_string(),
    }
}

#[test]
fn full_order_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    let tomato = listing("Tomatoes", 500.0, 25.5);
    store.put_stock(&[tomato.clone()]).unwrap();

    let manager = OrdersManager::new(store.clone());

    // 下单
    let order = manager.create_order(&tomato.id, "u_buyer", 100.0).unwrap();
    assert_eq!(order.status, OrderStatus::PendingCapacity);
    assert_eq!(order.total, 2550.0);
    assert_eq!(order.capacity_ok, None);
    assert!(order.logistics.is_none());

    // 产能确认
    let order = manager.set_capacity(&order.id, true).unwrap();
    assert_eq!(order.status, OrderStatus::ReadyForLogistics);
    assert_eq!(order.capacity_ok, Some(true));

    // 外部快递：100kg * 0.5 = 50，被 200 的地板托住
    let order = manager
        .set_logistics(&order.id, LogisticsMode::External)
        .unwrap();
    assert_eq!(order.status, OrderStatus::InTransit);
    let assignment = order.logistics.clone().unwrap();
    assert_eq!(assignment.cost, 200.0);
    assert_eq!(assignment.carrier.as_deref(), Some("External Courier"));
    assert_eq!(assignment.order_id, order.id);

    // 送达确认扣减库存
    let order = manager.confirm_delivery(&order.id).unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);

    let stock = store.stock().unwrap();
    assert_eq!(stock[0].qty_kg, 400.0);

    // KPI 反映送达结果
    let report = analytics::kpis(&store).unwrap();
    assert_eq!(report.kg_delivered, 100.0);
    assert_eq!(report.orders_delivered, 1);
    assert_eq!(report.external_courier, 1);
    assert_eq!(report.buyer_arranged_logistics, 0);
    assert_eq!(report.total_revenue, 2550.0);
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let order_id;
    let stock_id;
    {
        let store = open_store(&dir);
        let tomato = listing("Tomatoes", 100.0, 10.0);
        stock_id = tomato.id.clone();
        store.put_stock(&[tomato]).unwrap();

        let manager = OrdersManager::new(store);
        let order = manager.create_order(&stock_id, "u_buyer", 30.0).unwrap();
        order_id = order.id;
    }

    // 重新打开同一个数据库文件，继续走生命周期
    let store = open_store(&dir);
    let manager = OrdersManager::new(store.clone());

    let order = manager.find_order(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::PendingCapacity);

    let order = manager.confirm_delivery(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    assert_eq!(store.stock().unwrap()[0].qty_kg, 70.0);
}

#[test]
fn session_survives_reopen_until_logout() {
    let dir = TempDir::new().unwrap();

    {
        let auth = AuthService::new(open_store(&dir));
        auth.register("Ama Farmer", "farmer@example.com", "pass123", UserRole::Farmer)
            .unwrap();
    }

    {
        let auth = AuthService::new(open_store(&dir));
        let current = auth.current_user().unwrap().unwrap();
        assert_eq!(current.email, "farmer@example.com");
        auth.logout().unwrap();
    }

    let auth = AuthService::new(open_store(&dir));
    assert!(auth.current_user().unwrap().is_none());
}

#[test]
fn seeded_market_supports_suggestions_and_matching() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    market_server::seed::run(&store).unwrap();

    // s_001 是唯一的番茄挂牌 (25.50)，均价取整到 26
    let suggestion = pricing::suggest_price(&store, 40.0, "Tomatoes").unwrap();
    assert_eq!(suggestion.suggested, 26.0);
    assert!(suggestion.reason.contains("market avg"));

    // 种子需求里有一条 200kg 的番茄需求
    let stock = store.stock().unwrap();
    let tomato = stock.iter().find(|l| l.crop == "Tomatoes").unwrap();
    let matches = pricing::find_demand_matches(&store, tomato).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].qty_needed, 200.0);
}
