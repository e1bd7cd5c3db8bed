//! 演示数据
//!
//! 空库首启时写入一套演示数据：用户、挂牌库存、买家需求和
//! 几笔处于不同生命周期阶段的订单。`users` 集合非空时跳过。

use shared::models::{
    DemandEntry, LogisticsAssignment, LogisticsMode, LogisticsStatus, Order, OrderStatus,
    StockListing, User, UserRole,
};
use shared::util::now_millis;

use crate::store::MarketStore;

/// 所有演示账号共用的口令
const DEMO_PASSWORD: &str = "pass123";

/// 写入演示数据，库里已有用户时返回 `Ok(false)`
pub fn run(store: &MarketStore) -> anyhow::Result<bool> {
    if !store.users()?.is_empty() {
        return Ok(false);
    }

    let now = now_millis();

    // 演示账号共用口令，只哈希一次
    let password_hash = User::hash_password(DEMO_PASSWORD)
        .map_err(|e| anyhow::anyhow!("Failed to hash demo password: {e}"))?;

    let user = |id: &str, name: &str, email: &str, role: UserRole| User {
        id: id.to_string(),
        role,
        name: name.to_string(),
        email: email.to_string(),
        password_hash: password_hash.clone(),
        created_at: now,
    };

    let users = vec![
        user("u_farmer1", "Ama Farmer", "farmer@example.com", UserRole::Farmer),
        user("u_farmer2", "Thabo Mthembu", "thabo@example.com", UserRole::Farmer),
        user("u_buyer1", "Bongi Buyer", "buyer@example.com", UserRole::Buyer),
        user("u_buyer2", "Sarah Johnson", "sarah@example.com", UserRole::Buyer),
        user("u_dist1", "Dumi Logistics", "dist@example.com", UserRole::Distributor),
    ];

    let listing = |id: &str,
                   farmer_id: &str,
                   crop: &str,
                   variety: &str,
                   qty_kg: f64,
                   location: &str,
                   harvest_date: &str,
                   price_per_kg: f64| StockListing {
        id: id.to_string(),
        farmer_id: farmer_id.to_string(),
        crop: crop.to_string(),
        variety: Some(variety.to_string()),
        qty_kg,
        price_per_kg,
        location: Some(location.to_string()),
        harvest_date: Some(harvest_date.to_string()),
        status: "available".to_string(),
    };

    let stock = vec![
        listing("s_001", "u_farmer1", "Tomatoes", "Roma", 500.0, "North", "2025-01-15", 25.50),
        listing("s_002", "u_farmer1", "Potatoes", "Russet", 800.0, "North", "2025-01-10", 18.00),
        listing("s_003", "u_farmer2", "Maize", "Yellow", 1200.0, "South", "2025-01-20", 15.75),
        listing("s_004", "u_farmer2", "Cabbage", "Green", 300.0, "South", "2025-01-18", 22.00),
        listing("s_005", "u_farmer1", "Carrots", "Orange", 450.0, "North", "2025-01-12", 20.50),
        listing("s_006", "u_farmer2", "Onions", "Red", 600.0, "East", "2025-01-14", 19.00),
        listing("s_007", "u_farmer1", "Spinach", "Baby", 200.0, "West", "2025-01-22", 35.00),
        listing("s_008", "u_farmer2", "Butternut", "Local", 400.0, "South", "2025-01-16", 28.50),
    ];

    let demand_entry = |id: &str, buyer_id: &str, crop: &str, qty_needed: f64| DemandEntry {
        id: id.to_string(),
        buyer_id: buyer_id.to_string(),
        crop: crop.to_string(),
        qty_needed,
        created_at: now,
    };

    let demand = vec![
        demand_entry("d_001", "u_buyer1", "Tomatoes", 200.0),
        demand_entry("d_002", "u_buyer2", "Maize", 500.0),
        demand_entry("d_003", "u_buyer1", "Spinach", 80.0),
    ];

    let assignment = |id: &str,
                      order_id: &str,
                      mode: LogisticsMode,
                      cost: f64,
                      carrier: &str,
                      discount: f64| LogisticsAssignment {
        id: id.to_string(),
        order_id: order_id.to_string(),
        mode,
        discount,
        cost,
        carrier: Some(carrier.to_string()),
        status: LogisticsStatus::Scheduled,
    };

    let order = |id: &str,
                 stock_id: &str,
                 buyer_id: &str,
                 qty_kg: f64,
                 price_per_kg: f64,
                 total: f64,
                 status: OrderStatus,
                 logistics: Option<LogisticsAssignment>| Order {
        id: id.to_string(),
        stock_id: stock_id.to_string(),
        buyer_id: buyer_id.to_string(),
        qty_kg,
        price_per_kg,
        total,
        capacity_ok: Some(true),
        logistics,
        status,
        created_at: now,
    };

    let orders = vec![
        order(
            "o_001", "s_001", "u_buyer1", 100.0, 25.50, 2550.00,
            OrderStatus::Delivered,
            Some(assignment("l_001", "o_001", LogisticsMode::Buyer, 0.0, "Buyer Transport", 0.05)),
        ),
        order(
            "o_002", "s_002", "u_buyer2", 200.0, 18.00, 3600.00,
            OrderStatus::InTransit,
            Some(assignment("l_002", "o_002", LogisticsMode::External, 250.00, "Express Logistics SA", 0.0)),
        ),
        order(
            "o_003", "s_003", "u_buyer1", 300.0, 15.75, 4725.00,
            OrderStatus::Delivered,
            Some(assignment("l_003", "o_003", LogisticsMode::Buyer, 0.0, "Buyer Transport", 0.05)),
        ),
        order(
            "o_004", "s_004", "u_buyer2", 50.0, 22.00, 1100.00,
            OrderStatus::ReadyForLogistics,
            None,
        ),
        order(
            "o_005", "s_005", "u_buyer1", 150.0, 20.50, 3075.00,
            OrderStatus::Delivered,
            Some(assignment("l_004", "o_005", LogisticsMode::External, 180.00, "Swift Couriers", 0.0)),
        ),
    ];

    store.put_users(&users)?;
    store.put_stock(&stock)?;
    store.put_demand(&demand)?;
    store.put_orders(&orders)?;

    tracing::info!(
        "Seeded {} users, {} stock listings, {} demand entries, {} orders",
        users.len(),
        stock.len(),
        demand.len(),
        orders.len()
    );

    Ok(true)
}
