//! 连接池指标
//!
//! 收集连接池的累计计数，以及某一时刻的状态快照。

use std::sync::atomic::{AtomicU64, Ordering};

/// 连接池累计指标
#[derive(Debug, Default)]
pub struct PoolMetrics {
    /// 新建连接数
    created: AtomicU64,
    /// 复用空闲连接次数
    reused: AtomicU64,
    /// 归还次数
    released: AtomicU64,
    /// 因耗尽而失败的获取次数
    exhausted: AtomicU64,
    /// 完成的健康检查次数
    health_checks: AtomicU64,
    /// 健康探测故障次数（每次失败的尝试计一次）
    health_check_faults: AtomicU64,
}

impl PoolMetrics {
    /// 创建新的指标
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_reused(&self) {
        self.reused.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_released(&self) {
        self.released.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_exhausted(&self) {
        self.exhausted.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_health_check(&self) {
        self.health_checks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_health_check_fault(&self) {
        self.health_check_faults.fetch_add(1, Ordering::Relaxed);
    }

    pub fn created(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }

    pub fn reused(&self) -> u64 {
        self.reused.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> u64 {
        self.released.load(Ordering::Relaxed)
    }

    pub fn exhausted(&self) -> u64 {
        self.exhausted.load(Ordering::Relaxed)
    }

    pub fn health_checks(&self) -> u64 {
        self.health_checks.load(Ordering::Relaxed)
    }

    pub fn health_check_faults(&self) -> u64 {
        self.health_check_faults.load(Ordering::Relaxed)
    }

    /// 生成报告
    pub fn report(&self) -> String {
        format!(
            "连接池指标:\n\
             - 新建连接: {}\n\
             - 复用连接: {}\n\
             - 归还次数: {}\n\
             - 耗尽次数: {}\n\
             - 健康检查: {} (故障 {})",
            self.created(),
            self.reused(),
            self.released(),
            self.exhausted(),
            self.health_checks(),
            self.health_check_faults()
        )
    }
}

/// 连接池状态快照
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// 已创建的连接总数
    pub total: usize,
    /// 空闲连接数
    pub available: usize,
    /// 使用中的连接数
    pub in_use: usize,
    /// 容量上限
    pub max_connections: usize,
}

impl PoolStats {
    /// 是否已达容量上限且没有空闲连接
    pub fn is_saturated(&self) -> bool {
        self.available == 0 && self.total >= self.max_connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_counters() {
        let metrics = PoolMetrics::new();
        metrics.record_created();
        metrics.record_created();
        metrics.record_reused();
        metrics.record_released();
        metrics.record_exhausted();

        assert_eq!(metrics.created(), 2);
        assert_eq!(metrics.reused(), 1);
        assert_eq!(metrics.released(), 1);
        assert_eq!(metrics.exhausted(), 1);
        assert_eq!(metrics.health_checks(), 0);
    }

    #[test]
    fn test_metrics_report() {
        let metrics = PoolMetrics::new();
        metrics.record_health_check();
        metrics.record_health_check_fault();

        let report = metrics.report();
        assert!(report.contains("连接池指标"));
        assert!(report.contains("健康检查: 1 (故障 1)"));
    }

    #[test]
    fn test_stats_saturation() {
        let full = PoolStats { total: 2, available: 0, in_use: 2, max_connections: 2 };
        let room = PoolStats { total: 1, available: 0, in_use: 1, max_connections: 2 };
        assert!(full.is_saturated());
        assert!(!room.is_saturated());
    }
}
