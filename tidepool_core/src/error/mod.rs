//! Tidepool 统一错误处理
//!
//! 提供核心错误类型定义。

pub mod framework;

// 重新导出主要类型
pub use framework::{TidepoolError, TidepoolErrorKind};

/// Tidepool 统一 Result 类型
pub type Result<T> = std::result::Result<T, TidepoolError>;
