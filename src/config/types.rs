//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::persistence::sqlite::{DatabaseConfig as PoolConfig, DatabaseLocation};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9090
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库文件路径，`:memory:` 表示内存库
    #[serde(default = "default_db_path")]
    pub path: String,

    /// 最少保持的连接数
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// 最大连接数
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// 空闲连接回收时间（秒），0 表示不回收
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// 获取连接的最长等待时间（秒）
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// 启动时是否写入示例用户
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_db_path() -> String {
    "data/roster.db".to_string()
}

fn default_min_connections() -> u32 {
    5
}

fn default_max_connections() -> u32 {
    20
}

fn default_idle_timeout() -> u64 {
    1800 // 30 分钟
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            idle_timeout_secs: default_idle_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// 转换为连接池配置
    ///
    /// 内存库只能使用单连接
    pub fn pool_config(&self) -> PoolConfig {
        if self.is_in_memory() {
            return PoolConfig::in_memory();
        }

        PoolConfig {
            location: DatabaseLocation::File(PathBuf::from(&self.path)),
            min_connections: self.min_connections,
            max_connections: self.max_connections,
            idle_timeout: (self.idle_timeout_secs > 0)
                .then(|| Duration::from_secs(self.idle_timeout_secs)),
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.path, "data/roster.db");
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.idle_timeout_secs, 1800);
        assert!(config.database.seed_sample_data);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_database_location() {
        let config = DatabaseConfig {
            path: "data/users?v=2#a.db".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(
            config.pool_config().location,
            DatabaseLocation::File(PathBuf::from("data/users?v=2#a.db"))
        );

        let config = DatabaseConfig {
            path: ":memory:".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(config.pool_config().location, DatabaseLocation::Memory);
    }

    #[test]
    fn test_pool_config() {
        let pool = DatabaseConfig::default().pool_config();
        assert_eq!(pool.min_connections, 5);
        assert_eq!(pool.max_connections, 20);
        assert_eq!(pool.idle_timeout, Some(Duration::from_secs(1800)));
        assert_eq!(pool.acquire_timeout, Duration::from_secs(30));

        let no_idle = DatabaseConfig {
            idle_timeout_secs: 0,
            ..DatabaseConfig::default()
        };
        assert_eq!(no_idle.pool_config().idle_timeout, None);

        let memory = DatabaseConfig {
            path: ":memory:".to_string(),
            ..DatabaseConfig::default()
        };
        assert_eq!(memory.pool_config().max_connections, 1);
    }
}
