//! User HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateUser, DeleteUser, GetUser, ListUsers};
use crate::domain::UserId;
use crate::infrastructure::http::dto::{CreateUserRequest, PageParams, PageResponse, UserResponse};
use crate::infrastructure::http::error::{ApiError, ErrorResponse};
use crate::infrastructure::http::state::AppState;

/// 路径中的 ID 必须是整数
fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<UserId>()
        .map(|id| id.value())
        .map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))
}

fn user_not_found() -> ApiError {
    ApiError::NotFound("User not found".to_string())
}

/// 分页获取用户列表
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(PageParams),
    responses(
        (status = 200, description = "当前页用户", body = PageResponse<UserResponse>),
        (status = 400, description = "page 或 size 小于 1", body = ErrorResponse),
        (status = 503, description = "连接池耗尽", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<PageResponse<UserResponse>>, ApiError> {
    let Query(params) = params?;

    let page = state
        .list_users_handler
        .handle(ListUsers::from(params))
        .await?;

    Ok(Json(PageResponse::from(page)))
}

/// 获取用户详情
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 200, description = "用户详情", body = UserResponse),
        (status = 400, description = "ID 不是整数", body = ErrorResponse),
        (status = 404, description = "用户不存在", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = parse_user_id(&raw_id)?;

    let user = state
        .get_user_handler
        .handle(GetUser { user_id })
        .await?
        .ok_or_else(user_not_found)?;

    Ok(Json(UserResponse::from(user)))
}

/// 创建用户
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "创建成功", body = UserResponse),
        (status = 400, description = "请求体缺字段或字段为空", body = ErrorResponse),
        (status = 409, description = "邮箱已存在", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(req) = payload?;

    let command = CreateUser {
        name: req.name,
        email: req.email,
    };

    let user = state.create_user_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// 删除用户
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "用户 ID")),
    responses(
        (status = 204, description = "已删除"),
        (status = 400, description = "ID 不是整数", body = ErrorResponse),
        (status = 404, description = "用户不存在", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user_id = parse_user_id(&raw_id)?;

    let deleted = state
        .delete_user_handler
        .handle(DeleteUser { user_id })
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(user_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request},
        Router,
    };
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::{HttpServer, ServerConfig};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, seed_sample_users, DatabaseConfig, DbPool,
        SqliteUserRepository,
    };

    async fn seeded_pool(config: DatabaseConfig) -> DbPool {
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        seed_sample_users(&pool).await.unwrap();
        pool
    }

    fn app_for(pool: DbPool) -> Router {
        let state = AppState::new(Arc::new(SqliteUserRepository::new(pool)));
        HttpServer::new(ServerConfig::default(), state).router()
    }

    async fn create_test_app() -> Router {
        app_for(seeded_pool(DatabaseConfig::in_memory()).await)
    }

    fn request(method: Method, uri: &str, body: Option<&str>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn json<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_user_lifecycle_end_to_end() {
        let app = create_test_app().await;

        // Create
        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/users",
                Some(r#"{"name":"Ann","email":"ann@x.com"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: UserResponse = json(&body);
        assert_eq!(created.name, "Ann");
        assert_eq!(created.email, "ann@x.com");

        // Get
        let uri = format!("/users/{}", created.id);
        let (status, body) = send(&app, request(Method::GET, &uri, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json::<UserResponse>(&body), created);

        // Delete
        let (status, body) = send(&app, request(Method::DELETE, &uri, None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());

        // Gone
        let (status, body) = send(&app, request(Method::GET, &uri, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json::<ErrorResponse>(&body).error, "User not found");

        // Second delete
        let (status, _) = send(&app, request(Method::DELETE, &uri, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_seeded_users_with_defaults() {
        let app = create_test_app().await;

        let (status, body) = send(&app, request(Method::GET, "/users", None)).await;
        assert_eq!(status, StatusCode::OK);

        let page: PageResponse<UserResponse> = json(&body);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 20);
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].email, "john@example.com");
    }

    #[tokio::test]
    async fn test_list_with_explicit_page() {
        let app = create_test_app().await;

        let (status, body) = send(&app, request(Method::GET, "/users?page=2&size=1", None)).await;
        assert_eq!(status, StatusCode::OK);

        let page: PageResponse<UserResponse> = json(&body);
        assert_eq!(page.page, 2);
        assert_eq!(page.size, 1);
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Jane Smith");
    }

    #[tokio::test]
    async fn test_list_rejects_invalid_paging() {
        let app = create_test_app().await;

        for uri in [
            "/users?page=0",
            "/users?size=0",
            "/users?page=-1&size=10",
            "/users?page=abc&size=-5",
        ] {
            let (status, body) = send(&app, request(Method::GET, uri, None)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
            assert!(!json::<ErrorResponse>(&body).error.is_empty());
        }
    }

    #[tokio::test]
    async fn test_list_unparseable_paging_uses_defaults() {
        let app = create_test_app().await;

        for uri in [
            "/users?page=abc",
            "/users?size=x",
            "/users?page=",
            "/users?page=1.5&size=",
        ] {
            let (status, body) = send(&app, request(Method::GET, uri, None)).await;
            assert_eq!(status, StatusCode::OK, "uri: {}", uri);

            let page: PageResponse<UserResponse> = json(&body);
            assert_eq!(page.page, 1, "uri: {}", uri);
            assert_eq!(page.size, 20, "uri: {}", uri);
            assert_eq!(page.items.len(), 2, "uri: {}", uri);
        }

        // 只有一个参数无法解析时，另一个照常生效
        let (status, body) = send(&app, request(Method::GET, "/users?page=abc&size=1", None)).await;
        assert_eq!(status, StatusCode::OK);
        let page: PageResponse<UserResponse> = json(&body);
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_pool_is_service_unavailable() {
        let config = DatabaseConfig {
            acquire_timeout: std::time::Duration::from_millis(200),
            ..DatabaseConfig::in_memory()
        };
        let pool = seeded_pool(config).await;
        let app = app_for(pool.clone());

        // 占住唯一的连接
        let _held = pool.acquire().await.unwrap();

        for uri in ["/users", "/users/1"] {
            let (status, body) = send(&app, request(Method::GET, uri, None)).await;
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "uri: {}", uri);
            assert!(!json::<ErrorResponse>(&body).error.is_empty());
        }
    }

    #[tokio::test]
    async fn test_invalid_id_is_bad_request() {
        let app = create_test_app().await;

        let (status, body) = send(&app, request(Method::GET, "/users/abc", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json::<ErrorResponse>(&body).error, "Invalid ID");

        let (status, _) = send(&app, request(Method::DELETE, "/users/1.5", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let app = create_test_app().await;

        let (status, _) = send(&app, request(Method::GET, "/users/9999", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, request(Method::DELETE, "/users/9999", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let app = create_test_app().await;

        for body in [
            r#"{"name":"Ann"}"#,
            r#"{"name":"","email":"a@b.c"}"#,
            r#"{"name":"Ann","email":"  "}"#,
            r#"not json"#,
        ] {
            let (status, resp) = send(&app, request(Method::POST, "/users", Some(body))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert!(!json::<ErrorResponse>(&resp).error.is_empty());
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let app = create_test_app().await;

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/users",
                Some(r#"{"name":"John Again","email":"john@example.com"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(json::<ErrorResponse>(&body).error.contains("john@example.com"));

        let (_, body) = send(&app, request(Method::GET, "/users", None)).await;
        let page: PageResponse<UserResponse> = json(&body);
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_root_and_ping() {
        let app = create_test_app().await;

        let (status, body) = send(&app, request(Method::GET, "/", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.is_empty());

        let (status, body) = send(&app, request(Method::GET, "/ping", None)).await;
        assert_eq!(status, StatusCode::OK);
        let ping: serde_json::Value = json(&body);
        assert_eq!(ping["status"], "ok");
    }
}
