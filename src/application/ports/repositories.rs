//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::PageRequest;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 唯一约束冲突（如重复邮箱）
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    /// 连接池耗尽，等待超时
    #[error("Connection pool timed out: {0}")]
    PoolTimeout(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// 待插入的用户（id 由存储生成）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 分页获取用户（按 id 升序），同时返回总数
    async fn fetch_page(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<UserRecord>, i64), RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError>;

    /// 插入用户，返回带生成 ID 的记录
    ///
    /// 邮箱重复时返回 `RepositoryError::Duplicate`
    async fn insert(&self, user: &NewUserRecord) -> Result<UserRecord, RepositoryError>;

    /// 删除用户，返回是否有行被删除
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 用户总数
    async fn count(&self) -> Result<i64, RepositoryError>;
}
