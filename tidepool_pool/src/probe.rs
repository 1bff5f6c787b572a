//! 健康探测
//!
//! 定义检查单个连接是否存活的探测接口。

use crate::handle::ConnectionHandle;
use tidepool_core::Result;

/// 健康探测 trait
///
/// 返回 `Ok(false)` 表示连接已失活；返回 `Err` 表示本次探测出现故障，
/// 健康检查会整体重试。
pub trait HealthProbe: Send + Sync {
    /// 探测连接是否存活
    fn ping(&self, handle: &ConnectionHandle) -> Result<bool>;

    /// 获取探测器名称
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// 默认存活探测
///
/// 句柄不含真实连接状态，凡是池中存在的句柄都视为存活。
#[derive(Debug, Clone, Copy, Default)]
pub struct LivenessProbe;

impl HealthProbe for LivenessProbe {
    fn ping(&self, _handle: &ConnectionHandle) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "LivenessProbe"
    }
}
