//! User Queries

/// 获取用户详情查询
#[derive(Debug, Clone)]
pub struct GetUser {
    pub user_id: i64,
}

/// 分页列出用户查询
///
/// page/size 缺省时分别为 1 和 20
#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    pub page: Option<i64>,
    pub size: Option<i64>,
}
