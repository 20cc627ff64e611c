//! Roster - 用户管理 REST 服务
//!
//! 启动流程: 配置 → 日志 → 连接池 → 迁移/示例数据 → Repository → AppState → HTTP

use std::sync::Arc;

use roster::config::{load_config, print_config, LogConfig};
use roster::infrastructure::http::{AppState, HttpServer, ServerConfig};
use roster::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, seed_sample_users, SqliteUserRepository,
};

/// 初始化日志（RUST_LOG 优先于配置文件中的级别）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},roster={},tower_http=debug,sqlx=warn",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Roster - user service");
    print_config(&config);

    // 确保数据目录存在
    if !config.database.is_in_memory() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
    }

    // 初始化数据库
    let pool = create_pool(&config.database.pool_config()).await?;
    run_migrations(&pool).await?;
    if config.database.seed_sample_data {
        seed_sample_users(&pool).await?;
    }

    // 创建 Repository 适配器
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(user_repo);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
