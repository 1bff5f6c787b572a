//! Tidepool 查询构建
//!
//! 提供链式 SELECT 语句构建器。

pub mod builder;

pub use builder::{QueryBuilder, SortOrder};
