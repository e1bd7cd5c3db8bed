//! 服务器配置
//!
//! 从环境变量读取配置，全部带默认值：
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | `WORK_DIR` | `/var/lib/agrimarket` | 工作目录（数据库、日志） |
//! | `HTTP_PORT` | `5000` | HTTP 监听端口 |
//! | `ENVIRONMENT` | `development` | 运行环境标识 |
//! | `SEED_DEMO_DATA` | `true` | 首次启动时写入演示数据 |

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP 服务端口
    pub http_port: u16,
    /// 运行环境 (development / production)
    pub environment: String,
    /// 空库首启时是否写入演示数据
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "/var/lib/agrimarket".to_string(),
            http_port: 5000,
            environment: "development".to_string(),
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or(defaults.work_dir),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed_demo_data),
        }
    }

    /// 使用指定值覆盖（测试用）
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port,
            seed_demo_data: false,
            ..Self::default()
        }
    }

    /// 数据库文件路径
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("market.redb")
    }

    /// 确保工作目录存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.environment, "development");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn database_path_is_under_work_dir() {
        let config = Config::with_overrides("/tmp/agrimarket-test", 8080);
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/agrimarket-test/market.redb")
        );
    }

    #[test]
    fn overrides_disable_seeding() {
        let config = Config::with_overrides("/tmp/x", 1234);
        assert!(!config.seed_demo_data);
        assert_eq!(config.http_port, 1234);
    }
}
