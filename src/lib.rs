//! Roster - 用户管理 REST 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户值对象与校验
//! - Pagination: 分页请求与结果
//!
//! 应用层 (application/):
//! - Ports: UserRepositoryPort
//! - Commands: 创建、删除用户
//! - Queries: 分页列表、按 ID 查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Persistence: SQLite 连接池、迁移、UserRepository
//! - Memory: 内存 UserRepository

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
