//! OpenAPI 文档
//!
//! `/openapi` 返回 JSON 描述，`/swagger` 提供 Swagger UI

use utoipa::OpenApi;

use super::dto::{CreateUserRequest, UserResponse};
use super::error::ErrorResponse;
use super::handlers::{self, PingResponse};

/// REST API 的 OpenAPI 描述
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "分页用户管理接口"
    ),
    paths(
        handlers::index,
        handlers::ping,
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::delete_user,
    ),
    components(schemas(UserResponse, CreateUserRequest, ErrorResponse, PingResponse)),
    tags(
        (name = "users", description = "用户增删查"),
        (name = "health", description = "横幅与健康检查")
    )
)]
pub struct ApiDoc;
