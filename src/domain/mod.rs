//! Domain Layer - 领域层
//!
//! 包含:
//! - User Context: 用户值对象与校验规则
//! - Pagination: 分页请求与分页结果

pub mod pagination;
pub mod user;

pub use pagination::{Page, PageError, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use user::{Email, UserError, UserId, UserName};
