//! 市场数据存储 - 基于 redb 的集合键值存储
//!
//! 所有业务数据按固定键名以 JSON 整体存取：
//!
//! | 键 | 值 | 说明 |
//! |----|----|------|
//! | `users` | `Vec<User>` | 全部用户 |
//! | `farmer_stock` | `Vec<StockListing>` | 农户挂牌库存 |
//! | `buyer_demand` | `Vec<DemandEntry>` | 买家需求 |
//! | `orders` | `Vec<Order>` | 订单（含内嵌物流安排） |
//! | `logistics` | 保留 | 物流安排内嵌在订单里，此键预留 |
//! | `currentUserId` | `String` | 当前登录用户 |
//!
//! 每次写入都是一个独立的 redb 事务，提交后即持久化。
//! 读取对缺失或损坏的值回退到调用方给定的默认值。

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use shared::models::{DemandEntry, Order, StockListing, User};

const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// 用户集合键
pub const USERS_KEY: &str = "users";
/// 农户库存集合键
pub const STOCK_KEY: &str = "farmer_stock";
/// 买家需求集合键
pub const DEMAND_KEY: &str = "buyer_demand";
/// 订单集合键
pub const ORDERS_KEY: &str = "orders";
/// 物流集合键（预留，当前物流安排内嵌在订单中）
pub const LOGISTICS_KEY: &str = "logistics";
/// 当前登录用户键
pub const CURRENT_USER_KEY: &str = "currentUserId";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("数据库错误: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("事务错误: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("表错误: {0}")]
    Table(#[from] redb::TableError),

    #[error("存储错误: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("提交错误: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// 市场数据存储
///
/// 克隆成本低（内部为 `Arc<Database>`），可在多个 handler 间共享。
#[derive(Clone)]
pub struct MarketStore {
    db: Arc<Database>,
}

impl MarketStore {
    /// 打开（或创建）数据库文件
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.ensure_table()?;
        Ok(store)
    }

    /// 打开内存数据库（测试用）
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder()
            .create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.ensure_table()?;
        Ok(store)
    }

    /// 确保集合表存在
    fn ensure_table(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// 读取键下的值，缺失或损坏时回退到 `default`
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> StorageResult<T> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;

        match table.get(key)? {
            Some(value) => match serde_json::from_slice(value.value()) {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    // 损坏的数据回退到默认值，不让解析错误泄漏给调用方
                    tracing::warn!("Corrupt value under key '{}': {}", key, e);
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    /// 将值序列化后写入键下
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;

        Ok(())
    }

    /// 删除键
    pub fn delete(&self, key: &str) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;

        Ok(())
    }

    // ====== 类型化集合访问 ======

    pub fn users(&self) -> StorageResult<Vec<User>> {
        self.load(USERS_KEY, Vec::new())
    }

    pub fn put_users(&self, users: &[User]) -> StorageResult<()> {
        self.put(USERS_KEY, &users)
    }

    pub fn stock(&self) -> StorageResult<Vec<StockListing>> {
        self.load(STOCK_KEY, Vec::new())
    }

    pub fn put_stock(&self, stock: &[StockListing]) -> StorageResult<()> {
        self.put(STOCK_KEY, &stock)
    }

    pub fn demand(&self) -> StorageResult<Vec<DemandEntry>> {
        self.load(DEMAND_KEY, Vec::new())
    }

    pub fn put_demand(&self, demand: &[DemandEntry]) -> StorageResult<()> {
        self.put(DEMAND_KEY, &demand)
    }

    pub fn orders(&self) -> StorageResult<Vec<Order>> {
        self.load(ORDERS_KEY, Vec::new())
    }

    pub fn put_orders(&self, orders: &[Order]) -> StorageResult<()> {
        self.put(ORDERS_KEY, &orders)
    }

    // ====== 会话 ======

    pub fn current_user_id(&self) -> StorageResult<Option<String>> {
        self.load(CURRENT_USER_KEY, None)
    }

    pub fn set_current_user_id(&self, user_id: &str) -> StorageResult<()> {
        self.put(CURRENT_USER_KEY, &user_id)
    }

    pub fn clear_current_user(&self) -> StorageResult<()> {
        self.delete(CURRENT_USER_KEY)
    }
}
