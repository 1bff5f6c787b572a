//! # Tidepool - 轻量级连接池与查询构建工具集
//!
//! Tidepool 提供一个有界的连接句柄池、带重试的健康检查，以及一个链式
//! SELECT 查询构建器。所有 API 都是进程内同步调用，只有周期性健康检查
//! 任务运行在 Tokio 上。
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use tidepool::prelude::*;
//!
//! fn main() -> tidepool::Result<()> {
//!     let config = Config::new("127.0.0.1", 5432).with_max_connections(8);
//!     tidepool::init_tracing(&config)?;
//!
//!     let pool = ConnectionPool::new(config)?;
//!     let conn = pool.acquire()?;
//!     pool.release(conn)?;
//!
//!     let sql = QueryBuilder::new().from_table("users").limit(10).build()?;
//!     println!("{}", sql);
//!     Ok(())
//! }
//! ```
//!
//! ## 模块组织
//!
//! - `tidepool_config` - 配置加载与校验
//! - `tidepool_core` - 错误类型、重试工具、通用函数
//! - `tidepool_pool` - 连接池、健康探测、池指标
//! - `tidepool_query` - 查询构建器

use tidepool_config::Config;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Crate Re-exports
// ============================================================================

pub use tidepool_config;
pub use tidepool_core;

#[cfg(feature = "pool")]
pub use tidepool_pool;

#[cfg(feature = "query")]
pub use tidepool_query;

pub use tidepool_core::{RetryPolicy, add, greet, retry};

// ============================================================================
// Prelude Module
// ============================================================================

/// 预导出常用类型
///
/// 通过 `use tidepool::prelude::*;` 导入所有常用类型
pub mod prelude {
    pub use tidepool_config::{Config, ConfigError};

    pub use tidepool_core::prelude::*;

    #[cfg(feature = "pool")]
    pub use tidepool_pool::prelude::*;

    #[cfg(feature = "query")]
    pub use tidepool_query::{QueryBuilder, SortOrder};
}

// ============================================================================
// Error Types
// ============================================================================

/// Tidepool 统一 Result 类型
pub type Result<T> = std::result::Result<T, Error>;

/// Tidepool 统一错误枚举
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 核心错误
    #[error(transparent)]
    Core(#[from] tidepool_core::TidepoolError),

    /// 配置错误
    #[error(transparent)]
    Config(#[from] tidepool_config::ConfigError),

    /// IO 错误
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// 自定义错误
    #[error("{0}")]
    Custom(String),
}

// ============================================================================
// Logging
// ============================================================================

/// 初始化日志输出
///
/// 优先使用 `RUST_LOG`；未设置时 `config.debug` 为真则输出 debug 级别，否则 info。
/// 重复初始化返回 [`Error::Custom`]。
pub fn init_tracing(config: &Config) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|e| Error::Custom(format!("初始化日志失败: {}", e)))
}

// ============================================================================
// Version Information
// ============================================================================

/// Tidepool 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tidepool 包名
pub const NAME: &str = env!("CARGO_PKG_NAME");
