//! In-Memory User Repository Implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::application::ports::{NewUserRecord, RepositoryError, UserRecord, UserRepositoryPort};
use crate::domain::PageRequest;

#[derive(Default)]
struct UserTable {
    /// 下一个可分配的 ID（删除后不复用）
    next_id: i64,
    rows: BTreeMap<i64, UserRecord>,
}

/// 内存用户仓储
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn fetch_page(
        &self,
        page: &PageRequest,
    ) -> Result<(Vec<UserRecord>, i64), RepositoryError> {
        let table = self.table.read().await;
        let total = table.rows.len() as i64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let items = table
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, user: &NewUserRecord) -> Result<UserRecord, RepositoryError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|row| row.email == user.email) {
            return Err(RepositoryError::Duplicate(format!(
                "email already exists: {}",
                user.email
            )));
        }

        let id = table.next_id;
        table.next_id += 1;

        let record = UserRecord {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
        };
        table.rows.insert(id, record.clone());

        tracing::debug!(user_id = id, "User inserted (memory)");
        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.table.read().await.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let repo = InMemoryUserRepository::new();

        // Insert
        let ann = repo.insert(&new_user("Ann", "ann@x.com")).await.unwrap();
        let bob = repo.insert(&new_user("Bob", "bob@x.com")).await.unwrap();
        assert_eq!(ann.id, 1);
        assert_eq!(bob.id, 2);

        // Duplicate email
        let dup = repo.insert(&new_user("Ann 2", "ann@x.com")).await;
        assert!(matches!(dup, Err(RepositoryError::Duplicate(_))));
        assert_eq!(repo.count().await.unwrap(), 2);

        // Delete
        assert!(repo.delete_by_id(ann.id).await.unwrap());
        assert!(!repo.delete_by_id(ann.id).await.unwrap());
        assert!(repo.find_by_id(ann.id).await.unwrap().is_none());

        // IDs are not reused
        let carl = repo.insert(&new_user("Carl", "carl@x.com")).await.unwrap();
        assert_eq!(carl.id, 3);
    }

    #[tokio::test]
    async fn test_fetch_page_past_end_is_empty() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&new_user("Ann", "ann@x.com")).await.unwrap();

        let (items, total) = repo
            .fetch_page(&PageRequest::new(5, 10).unwrap())
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 1);
    }
}
