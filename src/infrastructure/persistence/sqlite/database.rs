//! SQLite Database - 数据库连接池、迁移和示例数据

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// 数据库位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// 磁盘文件，不存在时自动创建
    File(PathBuf),
    /// 内存库，连接关闭即丢失
    Memory,
}

/// 数据库连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub location: DatabaseLocation,
    /// 启动时建立并保持的最少连接数
    pub min_connections: u32,
    /// 最大连接数
    pub max_connections: u32,
    /// 空闲连接回收时间，None 表示不回收
    pub idle_timeout: Option<Duration>,
    /// 获取连接的最长等待时间，超时返回错误而不是无限排队
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            location: DatabaseLocation::File(PathBuf::from("data/roster.db")),
            min_connections: 5,
            max_connections: 20,
            idle_timeout: Some(Duration::from_secs(30 * 60)),
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            location: DatabaseLocation::File(path.as_ref().to_path_buf()),
            ..Self::default()
        }
    }

    /// 内存数据库：每个连接都是独立的库，因此只能使用单连接且不回收
    pub fn in_memory() -> Self {
        Self {
            location: DatabaseLocation::Memory,
            min_connections: 1,
            max_connections: 1,
            idle_timeout: None,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.location == DatabaseLocation::Memory
    }

    /// 文件路径直接交给 SQLite，不经过 URL 解析
    fn connect_options(&self) -> Result<SqliteConnectOptions, sqlx::Error> {
        match &self.location {
            DatabaseLocation::File(path) => Ok(SqliteConnectOptions::new()
                .filename(path)
                // WAL 允许并发读写
                .journal_mode(SqliteJournalMode::Wal)),
            DatabaseLocation::Memory => SqliteConnectOptions::from_str("sqlite::memory:"),
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 连接在归还（drop）时自动回到池中
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = config
        .connect_options()?
        .create_if_missing(true)
        // 遇到锁时等待 5s 而不是立即失败
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal);

    let mut pool_options = SqlitePoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .idle_timeout(config.idle_timeout)
        .acquire_timeout(config.acquire_timeout);

    if config.is_in_memory() {
        // 连接关闭即丢失数据
        pool_options = pool_options.max_lifetime(None::<Duration>);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        min_connections = config.min_connections,
        max_connections = config.max_connections,
        idle_timeout_secs = config.idle_timeout.map(|d| d.as_secs()),
        "SQLite pool created"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 示例用户
pub const SAMPLE_USERS: &[(&str, &str)] = &[
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
];

/// 写入示例用户，已存在的邮箱会被跳过，重复启动不会报错
pub async fn seed_sample_users(pool: &DbPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for (name, email) in SAMPLE_USERS {
        inserted += sqlx::query("INSERT OR IGNORE INTO users (name, email) VALUES (?, ?)")
            .bind(*name)
            .bind(*email)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    tx.commit().await?;

    tracing::info!(inserted = inserted, "Sample users seeded");
    Ok(inserted)
}
