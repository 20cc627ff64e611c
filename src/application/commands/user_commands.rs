//! User Commands

/// 创建用户命令
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

/// 删除用户命令
#[derive(Debug, Clone)]
pub struct DeleteUser {
    pub user_id: i64,
}
