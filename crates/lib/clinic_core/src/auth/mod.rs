//! Authentication primitives.
//!
//! Password hashing, token encode/decode, and the identity queries that back
//! login, registration, and bearer-token resolution.

pub mod jwt;
pub mod password;
pub mod queries;

use thiserror::Error;

/// Authentication errors.
///
/// Expected rejections (wrong password, unknown email, bad token) are *not*
/// represented here — those paths return `Option`/[`jwt::TokenOutcome`]
/// instead. An `AuthError` means the operation itself failed.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Hashing error: {0}")]
    Hashing(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}
