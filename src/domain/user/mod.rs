//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户标识、姓名、邮箱值对象
//! - 创建用户时的输入校验

mod errors;
mod value_objects;

pub use errors::UserError;
pub use value_objects::{Email, UserId, UserName, MAX_FIELD_LEN};
