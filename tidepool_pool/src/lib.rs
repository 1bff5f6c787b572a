//! Tidepool 连接池
//!
//! 提供有界的连接句柄池、健康探测和池指标。

pub mod handle;
pub mod metrics;
pub mod pool;
pub mod probe;

// 重新导出主要类型
pub use handle::{ConnectionHandle, ConnectionId};
pub use metrics::{PoolMetrics, PoolStats};
pub use pool::{ConnectionPool, HEALTH_CHECK_ATTEMPTS};
pub use probe::{HealthProbe, LivenessProbe};

// 预导出
pub mod prelude {
    pub use crate::handle::{ConnectionHandle, ConnectionId};
    pub use crate::pool::ConnectionPool;
    pub use crate::probe::{HealthProbe, LivenessProbe};
}
