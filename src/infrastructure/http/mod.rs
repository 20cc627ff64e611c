//! HTTP Layer - RESTful API
//!
//! 路由 → Handler → 应用层 Command/Query Handler

pub mod doc;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use doc::ApiDoc;
pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
