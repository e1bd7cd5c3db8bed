//! 订单生命周期管理
//!
//! 状态机（只进不退）：
//!
//! ```text
//! PENDING_CAPACITY ──ok──▶ READY_FOR_LOGISTICS ──▶ IN_TRANSIT ──▶ DELIVERED
//!        │
//!        └──!ok──▶ NO_CAPACITY_ALT_BUYER
//! ```
//!
//! 每个操作都是一次完整的「读集合 → 改内存 → 写回」序列，由内部
//! 互斥锁串行化，两次并发修改不会互相覆盖（丢失更新）。跨集合没有
//! 事务：confirm_delivery 在写完库存之后、写完订单之前崩溃，会留下
//! 已扣库存但未标记送达的订单。已知限制。
//!
//! 操作不做幂等保护：重复 set_logistics 会覆盖已有安排，重复
//! confirm_delivery 会再次扣减库存（地板为 0）。

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use shared::models::{LogisticsAssignment, LogisticsMode, Order, OrderStatus};
use shared::util::{new_id, now_millis};

use crate::store::{MarketStore, StorageError};
use crate::utils::money::round2;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Stock not found: {0}")]
    StockNotFound(String),

    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

/// 订单生命周期管理器
///
/// 克隆共享同一把写锁，保证跨 handler 的写操作串行。
#[derive(Clone)]
pub struct OrdersManager {
    store: MarketStore,
    write_lock: Arc<Mutex<()>>,
}

impl OrdersManager {
    pub fn new(store: MarketStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 全部订单，按创建顺序
    pub fn orders(&self) -> ManagerResult<Vec<Order>> {
        Ok(self.store.orders()?)
    }

    pub fn find_order(&self, order_id: &str) -> ManagerResult<Order> {
        self.store
            .orders()?
            .into_iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))
    }

    /// 创建订单
    ///
    /// 单价取自挂牌库存，`total = round2(qty * price)` 只在创建时
    /// 计算一次，之后不再重算。
    pub fn create_order(
        &self,
        stock_id: &str,
        buyer_id: &str,
        qty_kg: f64,
    ) -> ManagerResult<Order> {
        let _guard = self.write_lock.lock();

        let stock = self.store.stock()?;
        let listing = stock
            .iter()
            .find(|l| l.id == stock_id)
            .ok_or_else(|| ManagerError::StockNotFound(stock_id.to_string()))?;

        let price = listing.price_per_kg;
        let order = Order {
            id: new_id(),
            stock_id: listing.id.clone(),
            buyer_id: buyer_id.to_string(),
            qty_kg,
            price_per_kg: price,
            total: round2(qty_kg * price),
            capacity_ok: None,
            logistics: None,
            status: OrderStatus::PendingCapacity,
            created_at: now_millis(),
        };

        let mut orders = self.store.orders()?;
        orders.push(order.clone());
        self.store.put_orders(&orders)?;

        tracing::info!(
            "Order {} created: {} kg of stock {} for buyer {}",
            order.id,
            order.qty_kg,
            order.stock_id,
            order.buyer_id
        );

        Ok(order)
    }

    /// 记录产能确认结果
    pub fn set_capacity(&self, order_id: &str, ok: bool) -> ManagerResult<Order> {
        let _guard = self.write_lock.lock();

        let mut orders = self.store.orders()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))?;

        order.capacity_ok = Some(ok);
        order.status = if ok {
            OrderStatus::ReadyForLogistics
        } else {
            OrderStatus::NoCapacityAltBuyer
        };

        let updated = order.clone();
        self.store.put_orders(&orders)?;

        tracing::info!("Order {} capacity {} -> {}", updated.id, ok, updated.status.as_str());

        Ok(updated)
    }

    /// 安排物流
    ///
    /// 费用和折扣按模式计算，见 [`LogisticsAssignment::arrange`]。
    /// 已有安排会被新安排覆盖。
    pub fn set_logistics(&self, order_id: &str, mode: LogisticsMode) -> ManagerResult<Order> {
        let _guard = self.write_lock.lock();

        let mut orders = self.store.orders()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))?;

        let assignment = LogisticsAssignment::arrange(&order.id, mode, order.qty_kg);

        tracing::info!(
            "Order {} logistics: mode={} cost={}",
            order.id,
            assignment.mode.as_str(),
            assignment.cost
        );

        order.logistics = Some(assignment);
        order.status = OrderStatus::InTransit;

        let updated = order.clone();
        self.store.put_orders(&orders)?;

        Ok(updated)
    }

    /// 确认送达，扣减对应库存
    ///
    /// 库存数量最低扣到 0。订单引用的库存不存在时仅记录告警，
    /// 订单照常进入 DELIVERED。
    pub fn confirm_delivery(&self, order_id: &str) -> ManagerResult<Order> {
        let _guard = self.write_lock.lock();

        let mut orders = self.store.orders()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ManagerError::OrderNotFound(order_id.to_string()))?;

        let mut stock = self.store.stock()?;
        if let Some(listing) = stock.iter_mut().find(|l| l.id == order.stock_id) {
            listing.qty_kg = f64::max(0.0, listing.qty_kg - order.qty_kg);
            self.store.put_stock(&stock)?;
        } else {
            tracing::warn!("Order {} references missing stock {}", order.id, order.stock_id);
        }

        order.status = OrderStatus::Delivered;

        let updated = order.clone();
        self.store.put_orders(&orders)?;

        tracing::info!("Order {} delivered", updated.id);

        Ok(updated)
    }
}
