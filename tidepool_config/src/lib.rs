//! 配置管理系统
//!
//! 提供连接池配置，支持 TOML 文件加载和环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析配置文件失败: {0}")]
    Parse(String),

    /// 验证错误
    #[error("配置验证失败: {0}")]
    Validation(String),

    /// 环境变量错误
    #[error("环境变量解析失败: {0}")]
    EnvVar(String),
}

/// 配置 Result 类型
pub type Result<T> = std::result::Result<T, ConfigError>;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "TIDEPOOL_";

/// 连接池配置
///
/// 连接池在创建时复制一份配置，之后不再修改。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 目标主机
    #[serde(default = "default_host")]
    pub host: String,

    /// 目标端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 是否启用调试日志
    #[serde(default)]
    pub debug: bool,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            max_connections: default_max_connections(),
        }
    }
}

impl Config {
    /// 使用指定主机和端口创建配置，其余字段取默认值
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// 设置最大连接数
    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// 设置调试开关
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// 从 TOML 字符串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(format!("解析配置失败: {}", e)))
    }

    /// 从 TOML 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 从环境变量加载配置并覆盖
    ///
    /// 支持的环境变量：
    /// - TIDEPOOL_HOST: 目标主机
    /// - TIDEPOOL_PORT: 目标端口
    /// - TIDEPOOL_DEBUG: 调试开关 (true/false)
    /// - TIDEPOOL_MAX_CONNECTIONS: 最大连接数
    pub fn load_with_env_override(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// 使用自定义查找函数应用覆盖
    ///
    /// `lookup` 接收完整的变量名（含前缀）。
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(host) = var("HOST") {
            self.host = host;
        }

        if let Some(port) = var("PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::EnvVar("TIDEPOOL_PORT 必须是有效的 u16 数字".to_string()))?;
        }

        if let Some(debug) = var("DEBUG") {
            self.debug = debug
                .parse()
                .map_err(|_| ConfigError::EnvVar("TIDEPOOL_DEBUG 必须是 true 或 false".to_string()))?;
        }

        if let Some(max_conn) = var("MAX_CONNECTIONS") {
            self.max_connections = max_conn.parse().map_err(|_| {
                ConfigError::EnvVar("TIDEPOOL_MAX_CONNECTIONS 必须是有效的 usize 数字".to_string())
            })?;
        }

        Ok(self)
    }

    /// 从文件加载并应用环境变量覆盖
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file(path)?.load_with_env_override()
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ConfigError::Validation("主机地址不能为空".to_string()));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::Validation("最大连接数必须为正整数".to_string()));
        }

        Ok(())
    }

    /// 获取 `host:port` 形式的地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取配置摘要信息
    pub fn summary(&self) -> String {
        format!(
            "Tidepool 连接池配置:\n  地址: {}\n  最大连接数: {}\n  调试模式: {}",
            self.addr(),
            self.max_connections,
            self.debug
        )
    }
}

// 默认值函数
fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert_eq!(config.max_connections, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_addr() {
        let config = Config::new("db.internal", 5432);
        assert_eq!(config.addr(), "db.internal:5432");
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::new("127.0.0.1", 9000)
            .with_max_connections(4)
            .with_debug(true);
        assert_eq!(config.max_connections, 4);
        assert!(config.debug);
    }

    #[test]
    fn test_validate_zero_max_connections() {
        let config = Config::default().with_max_connections(0);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_empty_host() {
        let config = Config::new("", 8080);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = Config::from_toml_str("host = \"10.0.0.5\"\nmax_connections = 8\n").unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 8);
        assert!(!config.debug);
    }

    #[test]
    fn test_from_toml_invalid() {
        let result = Config::from_toml_str("port = \"not a number\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("tidepool_config_{}.toml", std::process::id()));
        std::fs::write(&path, "port = 6000\ndebug = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.port, 6000);
        assert!(config.debug);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/tidepool.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_override_all_fields() {
        let config = Config::default()
            .apply_overrides(lookup_from(&[
                ("TIDEPOOL_HOST", "cache.local"),
                ("TIDEPOOL_PORT", "6379"),
                ("TIDEPOOL_DEBUG", "true"),
                ("TIDEPOOL_MAX_CONNECTIONS", "16"),
            ]))
            .unwrap();
        assert_eq!(config.host, "cache.local");
        assert_eq!(config.port, 6379);
        assert!(config.debug);
        assert_eq!(config.max_connections, 16);
    }

    #[test]
    fn test_override_without_vars_keeps_values() {
        let config = Config::new("keep.me", 1234)
            .apply_overrides(lookup_from(&[]))
            .unwrap();
        assert_eq!(config, Config::new("keep.me", 1234));
    }

    #[test]
    fn test_override_invalid_port() {
        let result = Config::default().apply_overrides(lookup_from(&[("TIDEPOOL_PORT", "invalid")]));
        assert!(matches!(result, Err(ConfigError::EnvVar(_))));
    }

    #[test]
    fn test_override_invalid_debug() {
        let result = Config::default().apply_overrides(lookup_from(&[("TIDEPOOL_DEBUG", "yes")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_summary() {
        let summary = Config::default().summary();
        assert!(summary.contains("localhost:8080"));
        assert!(summary.contains("Tidepool 连接池配置"));
    }
}
