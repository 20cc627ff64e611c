//! User Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}
