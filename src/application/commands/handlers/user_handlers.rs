//! User Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateUser, DeleteUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{NewUserRecord, UserRepositoryPort};
use crate::application::queries::handlers::UserDetails;
use crate::domain::{Email, UserName};

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    /// 校验姓名与邮箱后插入，返回带生成 ID 的用户
    ///
    /// 邮箱重复时返回 `ApplicationError::Conflict`
    pub async fn handle(&self, command: CreateUser) -> Result<UserDetails, ApplicationError> {
        let name = UserName::new(command.name)?;
        let email = Email::new(command.email)?;

        let record = self
            .user_repo
            .insert(&NewUserRecord {
                name: name.into_inner(),
                email: email.into_inner(),
            })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "User insert failed");
                ApplicationError::from(e)
            })?;

        tracing::info!(
            user_id = record.id,
            email = %record.email,
            "User created"
        );

        Ok(UserDetails::from(record))
    }
}

// ============================================================================
// DeleteUser
// ============================================================================

/// DeleteUser Handler
///
/// 返回是否删除了用户；重复删除返回 false 而非错误
pub struct DeleteUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl DeleteUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, command: DeleteUser) -> Result<bool, ApplicationError> {
        let deleted = self.user_repo.delete_by_id(command.user_id).await?;

        if deleted {
            tracing::info!(user_id = command.user_id, "User deleted");
        }

        Ok(deleted)
    }
}
