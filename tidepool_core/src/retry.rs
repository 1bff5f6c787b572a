//! 重试工具
//!
//! 对可能偶发失败的操作进行有限次数的重试，两次尝试之间没有等待。

use std::fmt::Display;
use tracing::warn;

/// 默认尝试次数
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// 重试策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: usize,
}

impl RetryPolicy {
    /// 创建重试策略
    ///
    /// `max_attempts` 为总尝试次数（含首次调用），小于 1 时按 1 处理。
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// 总尝试次数
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// 执行操作，失败时重试
    ///
    /// 返回第一次成功的结果；全部失败时原样返回最后一次的错误。
    pub fn run<T, E, F>(&self, mut op: F) -> Result<T, E>
    where
        E: Display,
        F: FnMut() -> Result<T, E>,
    {
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(attempt, max_attempts = self.max_attempts, "attempt {} failed: {}", attempt, err);
                    if attempt >= self.max_attempts {
                        return Err(err);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// 以指定的尝试次数执行操作
pub fn retry<T, E, F>(max_attempts: usize, op: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Result<T, E>,
{
    RetryPolicy::new(max_attempts).run(op)
}
