//! 服务器共享状态
//!
//! `ServerState` 持有所有 handler 需要的共享资源，通过 axum 的
//! `State` extractor 注入：
//!
//! | 字段 | 说明 |
//! |------|------|
//! | `config` | 服务器配置 |
//! | `store` | redb 键值存储 |
//! | `orders` | 订单生命周期管理器 |
//! | `auth` | 认证与会话服务 |

use crate::auth::AuthService;
use crate::core::Config;
use crate::orders::OrdersManager;
use crate::store::MarketStore;

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: MarketStore,
    pub orders: OrdersManager,
    pub auth: AuthService,
}

impl ServerState {
    pub fn new(config: Config, store: MarketStore) -> Self {
        let orders = OrdersManager::new(store.clone());
        let auth = AuthService::new(store.clone());

        Self {
            config,
            store,
            orders,
            auth,
        }
    }

    /// 初始化服务器状态
    ///
    /// # Panics
    ///
    /// 工作目录或数据库初始化失败时 panic
    pub fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory");

        let store = MarketStore::open(config.database_path()).expect("Failed to open market store");

        let state = Self::new(config.clone(), store);

        if config.seed_demo_data {
            match crate::seed::run(&state.store) {
                Ok(true) => tracing::info!("Demo data seeded"),
                Ok(false) => tracing::debug!("Store already populated, seeding skipped"),
                Err(e) => tracing::warn!("Seeding failed: {}", e),
            }
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_cloneable_and_shares_the_store() {
        let store = MarketStore::open_in_memory().unwrap();
        let state = ServerState::new(Config::with_overrides("/tmp/unused", 0), store);

        let clone = state.clone();
        clone
            .store
            .set_current_user_id("u_test")
            .unwrap();

        // 克隆共享同一底层数据库
        assert_eq!(state.store.current_user_id().unwrap(), Some("u_test".to_string()));
    }
}
