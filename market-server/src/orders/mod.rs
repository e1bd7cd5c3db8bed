//! 订单生命周期
//!
//! 订单状态机的唯一写入方，也是库存数量的唯一修改方。

pub mod manager;

pub use manager::{ManagerError, ManagerResult, OrdersManager};
