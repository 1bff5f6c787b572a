//! 连接池
//!
//! 按需创建连接句柄，借出后通过 `release` 归还。空闲句柄按栈的方式复用：
//! 最后归还的句柄最先被再次借出。句柄一旦创建就永久保留在池中。

use crate::handle::{ConnectionHandle, ConnectionId};
use crate::metrics::{PoolMetrics, PoolStats};
use crate::probe::{HealthProbe, LivenessProbe};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tidepool_config::Config;
use tidepool_core::{Result, RetryPolicy, TidepoolError};
use tracing::{debug, error, info, warn};

/// 健康检查的总尝试次数
pub const HEALTH_CHECK_ATTEMPTS: usize = 3;

/// 连接池
///
/// 克隆得到的实例共享同一份状态。
#[derive(Clone)]
pub struct ConnectionPool {
    config: Arc<Config>,
    inner: Arc<RwLock<PoolInner>>,
    probe: Arc<dyn HealthProbe>,
    metrics: Arc<PoolMetrics>,
}

/// 连接池内部存储
#[derive(Debug)]
struct PoolInner {
    /// 所有创建过的连接，按创建顺序
    connections: Vec<ConnectionHandle>,
    /// 空闲连接栈
    available: Vec<ConnectionHandle>,
    /// 下一个连接 ID
    next_id: u64,
}

impl PoolInner {
    fn new() -> Self {
        Self {
            connections: Vec::new(),
            available: Vec::new(),
            next_id: 1,
        }
    }

    fn create(&mut self, config: &Config) -> ConnectionHandle {
        let handle = ConnectionHandle::new(ConnectionId::new(self.next_id), config.host.as_str(), config.port);
        self.next_id += 1;
        self.connections.push(handle.clone());
        handle
    }
}

impl ConnectionPool {
    /// 使用默认存活探测创建连接池
    pub fn new(config: Config) -> Result<Self> {
        Self::with_probe(config, LivenessProbe)
    }

    /// 使用自定义探测创建连接池
    pub fn with_probe<P>(config: Config, probe: P) -> Result<Self>
    where
        P: HealthProbe + 'static,
    {
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            inner: Arc::new(RwLock::new(PoolInner::new())),
            probe: Arc::new(probe),
            metrics: Arc::new(PoolMetrics::new()),
        })
    }

    /// 借出一个连接
    ///
    /// 优先复用最近归还的空闲连接；没有空闲连接时在容量允许的情况下新建，
    /// 否则返回 [`TidepoolError::PoolExhausted`]。
    pub fn acquire(&self) -> Result<ConnectionHandle> {
        let mut inner = self.write()?;

        if let Some(handle) = inner.available.pop() {
            debug!(id = %handle.id(), "reusing existing connection");
            self.metrics.record_reused();
            return Ok(handle);
        }

        if inner.connections.len() < self.config.max_connections {
            let handle = inner.create(&self.config);
            info!(id = %handle.id(), "creating connection to {}", self.config.addr());
            self.metrics.record_created();
            return Ok(handle);
        }

        self.metrics.record_exhausted();
        Err(TidepoolError::pool_exhausted(self.config.max_connections))
    }

    /// 归还连接
    ///
    /// 不校验句柄来源，也不检测重复归还。
    pub fn release(&self, handle: ConnectionHandle) -> Result<()> {
        let mut inner = self.write()?;
        debug!(id = %handle.id(), "connection released");
        inner.available.push(handle);
        self.metrics.record_released();
        Ok(())
    }

    /// 检查连接池是否健康
    ///
    /// 按创建顺序探测每个连接，遇到第一个失活连接即返回 `false`。
    /// 探测故障会让整次检查重试，最多尝试 [`HEALTH_CHECK_ATTEMPTS`] 次，
    /// 全部失败时返回最后一次的故障。
    pub fn health_check(&self) -> Result<bool> {
        let healthy = RetryPolicy::new(HEALTH_CHECK_ATTEMPTS).run(|| {
            self.check_once().inspect_err(|_| self.metrics.record_health_check_fault())
        })?;

        self.metrics.record_health_check();
        Ok(healthy)
    }

    fn check_once(&self) -> Result<bool> {
        for handle in self.all_handles()? {
            if !self.probe.ping(&handle)? {
                warn!(id = %handle.id(), probe = self.probe.name(), "connection failed liveness check");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// 启动健康检查任务
    ///
    /// 按固定间隔执行 [`health_check`](Self::health_check)，需要在 tokio 运行时中调用。
    /// 间隔为零时返回配置错误。
    pub fn spawn_health_task(&self, interval: Duration) -> Result<tokio::task::JoinHandle<()>> {
        if interval.is_zero() {
            return Err(TidepoolError::config("健康检查间隔必须大于 0"));
        }

        let pool = self.clone();

        Ok(tokio::spawn(async move {
            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match pool.health_check() {
                    Ok(true) => {}
                    Ok(false) => {
                        warn!(addr = %pool.config.addr(), "connection pool is unhealthy");
                    }
                    Err(e) => {
                        error!(addr = %pool.config.addr(), "health check failed: {}", e);
                    }
                }
            }
        }))
    }

    /// 获取连接池配置
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 获取累计指标
    pub fn metrics(&self) -> &PoolMetrics {
        &self.metrics
    }

    /// 已创建的连接总数
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.connections.len())
    }

    /// 是否尚未创建任何连接
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// 空闲连接数
    pub fn available_count(&self) -> Result<usize> {
        Ok(self.read()?.available.len())
    }

    /// 使用中的连接数
    pub fn in_use_count(&self) -> Result<usize> {
        Ok(self.stats()?.in_use)
    }

    /// 获取所有连接，按创建顺序
    pub fn all_handles(&self) -> Result<Vec<ConnectionHandle>> {
        Ok(self.read()?.connections.clone())
    }

    /// 获取状态快照
    pub fn stats(&self) -> Result<PoolStats> {
        let inner = self.read()?;
        let total = inner.connections.len();
        let available = inner.available.len();

        Ok(PoolStats {
            total,
            available,
            // 重复归还可能让空闲数超过总数
            in_use: total.saturating_sub(available),
            max_connections: self.config.max_connections,
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PoolInner>> {
        self.inner
            .read()
            .map_err(|e| TidepoolError::lock(format!("获取读锁失败: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PoolInner>> {
        self.inner
            .write()
            .map_err(|e| TidepoolError::lock(format!("获取写锁失败: {}", e)))
    }
}

impl fmt::Debug for ConnectionPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionPool")
            .field("config", &self.config)
            .field("inner", &self.inner)
            .field("probe", &self.probe.name())
            .finish()
    }
}
