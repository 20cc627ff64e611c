//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::{PageError, UserError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 唯一约束冲突
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 资源暂不可用（连接池耗尽）
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Duplicate(msg) => Self::Conflict(msg),
            RepositoryError::PoolTimeout(msg) => Self::Unavailable(msg),
            RepositoryError::DatabaseError(_) => Self::RepositoryError(err.to_string()),
        }
    }
}

impl From<UserError> for ApplicationError {
    fn from(err: UserError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<PageError> for ApplicationError {
    fn from(err: PageError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_mapping() {
        let err = ApplicationError::from(RepositoryError::Duplicate("email".to_string()));
        assert!(matches!(err, ApplicationError::Conflict(_)));

        let err = ApplicationError::from(RepositoryError::PoolTimeout("busy".to_string()));
        assert!(matches!(err, ApplicationError::Unavailable(_)));

        let err = ApplicationError::from(RepositoryError::DatabaseError("disk".to_string()));
        assert!(matches!(err, ApplicationError::RepositoryError(_)));
    }

    #[test]
    fn test_page_error_is_validation() {
        let err = ApplicationError::from(PageError::NotPositive);
        assert_eq!(
            err.to_string(),
            "Validation error: page and size must be positive integers"
        );
    }
}
