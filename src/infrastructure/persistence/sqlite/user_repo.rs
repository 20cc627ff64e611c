//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{NewUserRecord, RepositoryError, UserRecord, UserRepositoryPort};
use crate::domain::PageRequest;

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// 将 sqlx 错误映射为仓储错误
fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicate(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            RepositoryError::PoolTimeout(format!("{}: no connection available", operation))
        }
        other => RepositoryError::DatabaseError(format!("{}: {}", operation, other)),
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn fetch_page(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<UserRecord>, i64), RepositoryError> {
        // 总数与当页数据在同一事务内读取
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("fetch_page", e))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("fetch_page", e))?;

        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, name, email FROM users ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("fetch_page", e))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("fetch_page", e))?;

        Ok((rows.into_iter().map(UserRecord::from).collect(), total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, name, email FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_sqlx_error("find_by_id", e))?;

        Ok(row.map(UserRecord::from))
    }

    async fn insert(&self, user: &NewUserRecord) -> Result<UserRecord, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await
            .map_err(|e| match map_sqlx_error("insert", e) {
                RepositoryError::Duplicate(_) => {
                    RepositoryError::Duplicate(format!("email already exists: {}", user.email))
                }
                other => other,
            })?;

        Ok(UserRecord {
            id: result.last_insert_rowid(),
            name: user.name.clone(),
            email: user.email.clone(),
        })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count", e))
    }
}
