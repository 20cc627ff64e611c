//! User Context - Value Objects

use serde::{Deserialize, Serialize};

use super::UserError;

/// 姓名与邮箱的最大长度（与 users 表列宽一致）
pub const MAX_FIELD_LEN: usize = 255;

/// 用户唯一标识，由数据库自增生成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::str::FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 用户姓名
///
/// 不变量:
/// - 去除首尾空白后不可为空
/// - 长度不超过 255 字符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Result<Self, UserError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserError::InvalidName("name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_FIELD_LEN {
            return Err(UserError::InvalidName(format!(
                "name must be at most {} characters",
                MAX_FIELD_LEN
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 用户邮箱
///
/// 唯一性由存储层的 UNIQUE 约束保证，这里只校验非空和长度
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Result<Self, UserError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserError::InvalidEmail("email must not be empty".to_string()));
        }
        if email.chars().count() > MAX_FIELD_LEN {
            return Err(UserError::InvalidEmail(format!(
                "email must be at most {} characters",
                MAX_FIELD_LEN
            )));
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
