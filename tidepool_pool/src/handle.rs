//! 连接句柄
//!
//! 连接池借出的不透明连接标识，不持有任何真实的套接字或会话状态。

use std::fmt;

/// 连接唯一标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// 创建新的连接 ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// 获取内部值
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 连接句柄
///
/// 由连接池在首次需要时创建，之后在空闲与使用中之间循环，永不关闭。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionHandle {
    id: ConnectionId,
    host: String,
    port: u16,
}

impl ConnectionHandle {
    pub(crate) fn new(id: ConnectionId, host: impl Into<String>, port: u16) -> Self {
        Self {
            id,
            host: host.into(),
            port,
        }
    }

    /// 连接 ID
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// 获取 `host:port` 形式的地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}:{}", self.id, self.host, self.port)
    }
}
