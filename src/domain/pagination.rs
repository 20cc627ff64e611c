//! Pagination - 分页值对象
//!
//! 页码从 1 开始，`offset = (page - 1) * size`

use serde::Serialize;
use thiserror::Error;

/// 默认页码
pub const DEFAULT_PAGE: i64 = 1;

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("page and size must be positive integers")]
    NotPositive,

    #[error("page {page} with size {size} is out of range")]
    OutOfRange { page: i64, size: i64 },
}

/// 分页请求
///
/// 不变量:
/// - page >= 1, size >= 1
/// - offset 不会溢出 i64
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Result<Self, PageError> {
        if page < 1 || size < 1 {
            return Err(PageError::NotPositive);
        }
        if (page - 1).checked_mul(size).is_none() {
            return Err(PageError::OutOfRange { page, size });
        }
        Ok(Self { page, size })
    }

    /// 使用默认值填充缺省参数后构造
    pub fn from_optional(page: Option<i64>, size: Option<i64>) -> Result<Self, PageError> {
        Self::new(
            page.unwrap_or(DEFAULT_PAGE),
            size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        // 构造时已检查溢出
        (self.page - 1) * self.size
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 分页结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, items: Vec<T>, total: i64) -> Self {
        Self {
            items,
            page: request.page(),
            size: request.size(),
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}
