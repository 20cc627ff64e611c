//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{ListUsers, UserDetails};
use crate::domain::Page;

// ============================================================================
// User DTOs
// ============================================================================

/// 用户
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<UserDetails> for UserResponse {
    fn from(user: UserDetails) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// 创建用户请求，name 与 email 均为必填
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// 分页查询参数
///
/// 按原始字符串接收，无法解析为整数的值视为未提供
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 页码，从 1 开始，默认 1
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// 每页条数，默认 20
    #[param(value_type = Option<i64>)]
    pub size: Option<String>,
}

fn parse_lenient(raw: Option<String>) -> Option<i64> {
    raw.and_then(|value| value.parse().ok())
}

impl From<PageParams> for ListUsers {
    fn from(params: PageParams) -> Self {
        Self {
            page: parse_lenient(params.page),
            size: parse_lenient(params.size),
        }
    }
}

/// 分页响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

impl<T, U: Into<T>> From<Page<U>> for PageResponse<T> {
    fn from(page: Page<U>) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            page: page.page,
            size: page.size,
            total: page.total,
        }
    }
}
