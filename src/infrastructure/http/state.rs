//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateUserHandler, DeleteUserHandler,
    // Query handlers
    GetUserHandler, ListUsersHandler,
    // Ports
    UserRepositoryPort,
};

/// 应用状态
///
/// 由 main 显式构造并注入，Handler 之间不共享可变状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,
    pub delete_user_handler: DeleteUserHandler,

    // ========== Query Handlers ==========
    pub list_users_handler: ListUsersHandler,
    pub get_user_handler: GetUserHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self {
            // Command handlers
            create_user_handler: CreateUserHandler::new(user_repo.clone()),
            delete_user_handler: DeleteUserHandler::new(user_repo.clone()),

            // Query handlers
            list_users_handler: ListUsersHandler::new(user_repo.clone()),
            get_user_handler: GetUserHandler::new(user_repo),
        }
    }
}
