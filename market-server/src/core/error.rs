//! 服务器级错误

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("绑定端口失败: {0}")]
    Bind(std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
