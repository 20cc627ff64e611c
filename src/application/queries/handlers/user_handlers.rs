//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{UserRecord, UserRepositoryPort};
use crate::application::queries::{GetUser, ListUsers};
use crate::domain::{Page, PageRequest};

// ============================================================================
// Response DTOs
// ============================================================================

/// 用户详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserRecord> for UserDetails {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 校验分页参数后查询；参数非法时不会访问存储
    pub async fn handle(&self, query: ListUsers) -> Result<Page<UserDetails>, ApplicationError> {
        let request = PageRequest::from_optional(query.page, query.size)?;

        let (records, total) = self.user_repo.fetch_page(&request).await?;

        tracing::debug!(
            page = request.page(),
            size = request.size(),
            returned = records.len(),
            total = total,
            "Users page fetched"
        );

        Ok(Page::new(request, records, total).map(UserDetails::from))
    }
}

/// GetUser Handler
///
/// 未找到时返回 `None`，由传输层决定状态码
pub struct GetUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl GetUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, query: GetUser) -> Result<Option<UserDetails>, ApplicationError> {
        let user = self.user_repo.find_by_id(query.user_id).await?;
        Ok(user.map(UserDetails::from))
    }
}
