//! Memory Layer - In-Memory Repository
//!
//! 不依赖数据库的 UserRepository 实现，语义与 SQLite 实现一致（自增 ID、邮箱唯一、按 ID 升序）

mod user_repo;

pub use user_repo::InMemoryUserRepository;
