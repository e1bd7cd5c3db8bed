//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型与 HTTP 映射
//! - [`logger`] - tracing 日志初始化
//! - [`money`] - 金额舍入
//! - [`validation`] - 输入校验

pub mod error;
pub mod logger;
pub mod money;
pub mod validation;

pub use error::{AppError, AppResult};
