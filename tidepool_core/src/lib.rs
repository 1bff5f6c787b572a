//! Tidepool 核心
//!
//! 提供统一错误类型、重试工具和通用函数。

pub mod error;
pub mod retry;
pub mod util;

// 导出主要类型到 crate root
pub use crate::error::{Result, TidepoolError, TidepoolErrorKind};
pub use crate::retry::{RetryPolicy, retry};
pub use crate::util::{add, greet};

// 预导出
pub mod prelude {
    pub use crate::error::{Result, TidepoolError, TidepoolErrorKind};
    pub use crate::retry::{RetryPolicy, retry};
}
