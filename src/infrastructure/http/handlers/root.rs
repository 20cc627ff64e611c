//! Root Handlers
//!
//! 服务横幅与健康检查

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// 服务横幅
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "服务横幅", body = String, content_type = "text/plain"))
)]
pub async fn index() -> &'static str {
    "Roster - user service on axum + SQLite"
}

/// Ping 响应
#[derive(Serialize, ToSchema)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
#[utoipa::path(
    get,
    path = "/ping",
    tag = "health",
    responses((status = 200, description = "服务存活", body = PingResponse))
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
