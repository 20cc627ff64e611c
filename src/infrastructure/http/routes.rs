//! HTTP Routes
//!
//! API Endpoints:
//! - /               GET     服务横幅
//! - /ping           GET     健康检查
//! - /users          GET     分页列出用户（?page=1&size=20）
//! - /users          POST    创建用户
//! - /users/{id}     GET     获取用户
//! - /users/{id}     DELETE  删除用户
//! - /openapi        GET     OpenAPI JSON
//! - /swagger        GET     Swagger UI

use axum::{routing::get, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::doc::ApiDoc;
use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ping", get(handlers::ping))
        .merge(user_routes())
        .merge(SwaggerUi::new("/swagger").url("/openapi", ApiDoc::openapi()))
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/:id",
            get(handlers::get_user).delete(handlers::delete_user),
        )
}
