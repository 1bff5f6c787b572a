//! 链式 SELECT 查询构建器
//!
//! 仅做字符串拼接，不做转义或语法校验。

use std::fmt;
use tidepool_core::{Result, TidepoolError};

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// 升序
    #[default]
    Asc,
    /// 降序
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("ASC"),
            SortOrder::Desc => f.write_str("DESC"),
        }
    }
}

/// 查询构建器
///
/// ```
/// use tidepool_query::QueryBuilder;
///
/// let sql = QueryBuilder::new()
///     .from_table("users")
///     .where_clause("age > 18")
///     .order_by("name")
///     .limit(10)
///     .build()
///     .unwrap();
/// assert_eq!(sql, "SELECT * FROM users WHERE age > 18 ORDER BY name ASC LIMIT 10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    table: Option<String>,
    conditions: Vec<String>,
    order: Option<(String, SortOrder)>,
    limit: Option<u64>,
}

impl QueryBuilder {
    /// 创建空的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置查询的表，重复调用以最后一次为准
    pub fn from_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// 追加过滤条件，多个条件以 AND 连接
    pub fn where_clause(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    /// 按列升序排序
    pub fn order_by(self, column: impl Into<String>) -> Self {
        self.order_by_with(column, SortOrder::Asc)
    }

    /// 按列降序排序
    pub fn order_by_desc(self, column: impl Into<String>) -> Self {
        self.order_by_with(column, SortOrder::Desc)
    }

    /// 指定排序方向，重复调用以最后一次为准
    pub fn order_by_with(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.order = Some((column.into(), order));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// 生成 SQL
    ///
    /// 未设置表名或表名为空时返回 [`TidepoolError::MissingTable`]。
    pub fn build(&self) -> Result<String> {
        let table = match self.table.as_deref() {
            Some(table) if !table.is_empty() => table,
            _ => return Err(TidepoolError::MissingTable),
        };

        let mut query = format!("SELECT * FROM {}", table);

        if !self.conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.conditions.join(" AND "));
        }

        if let Some((column, order)) = &self.order {
            query.push_str(&format!(" ORDER BY {} {}", column, order));
        }

        if let Some(n) = self.limit {
            query.push_str(&format!(" LIMIT {}", n));
        }

        Ok(query)
    }
}
