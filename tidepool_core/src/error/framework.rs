//! Tidepool 核心错误类型
//!
//! 定义连接池、查询构建器和重试工具共用的错误类型。

use thiserror::Error;
use tidepool_config::ConfigError;

/// Tidepool 核心错误类型
#[derive(Error, Debug)]
pub enum TidepoolError {
    /// 连接池已耗尽：没有空闲连接且已达容量上限
    #[error("连接池已耗尽 (最大连接数: {max_connections})")]
    PoolExhausted {
        /// 配置的容量上限
        max_connections: usize,
    },

    /// 构建查询前未指定表名
    #[error("构建查询需要表名")]
    MissingTable,

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 健康探测故障（可重试）
    #[error("健康探测失败: {0}")]
    Probe(String),

    /// 内部锁被污染
    #[error("获取锁失败: {0}")]
    Lock(String),

    /// 整数运算溢出
    #[error("整数溢出: {0}")]
    Overflow(String),
}

impl TidepoolError {
    /// 获取错误类型
    pub fn kind(&self) -> TidepoolErrorKind {
        match self {
            TidepoolError::PoolExhausted { .. } => TidepoolErrorKind::PoolExhausted,
            TidepoolError::MissingTable => TidepoolErrorKind::MissingTable,
            TidepoolError::Config(_) => TidepoolErrorKind::Config,
            TidepoolError::Probe(_) => TidepoolErrorKind::Probe,
            TidepoolError::Lock(_) => TidepoolErrorKind::Lock,
            TidepoolError::Overflow(_) => TidepoolErrorKind::Overflow,
        }
    }

    /// 创建连接池耗尽错误
    pub fn pool_exhausted(max_connections: usize) -> Self {
        TidepoolError::PoolExhausted { max_connections }
    }

    /// 创建配置错误
    pub fn config(msg: impl Into<String>) -> Self {
        TidepoolError::Config(msg.into())
    }

    /// 创建探测错误
    pub fn probe(msg: impl Into<String>) -> Self {
        TidepoolError::Probe(msg.into())
    }

    /// 创建锁错误
    pub fn lock(msg: impl Into<String>) -> Self {
        TidepoolError::Lock(msg.into())
    }

    /// 创建溢出错误
    pub fn overflow(msg: impl Into<String>) -> Self {
        TidepoolError::Overflow(msg.into())
    }
}

impl From<ConfigError> for TidepoolError {
    fn from(err: ConfigError) -> Self {
        TidepoolError::Config(err.to_string())
    }
}

/// 错误类型分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TidepoolErrorKind {
    /// 连接池耗尽
    PoolExhausted,
    /// 缺少表名
    MissingTable,
    /// 配置错误
    Config,
    /// 探测故障
    Probe,
    /// 锁错误
    Lock,
    /// 整数溢出
    Overflow,
}
