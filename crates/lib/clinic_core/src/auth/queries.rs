//! Identity queries — the credential-store boundary.
//!
//! One point lookup keyed on the unique email index, one insert that the
//! index arbitrates, and the pre-registration existence re-check.

use sqlx::PgPool;
use uuid::Uuid;

use super::AuthError;
use crate::models::auth::{User, UserWithPassword};

type UserRow = (Uuid, String, String, Option<String>, String, String);

fn row_to_user(row: UserRow) -> UserWithPassword {
    let (id, user_name, email, phone, role, password_hash) = row;
    UserWithPassword {
        user: User {
            id,
            user_name,
            email,
            phone,
            role,
        },
        password_hash,
    }
}

/// Fetch an identity by email, including the stored password hash.
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserWithPassword>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, user_name, email, phone, role, password_hash \
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(row_to_user))
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Insert a new identity, returning the stored record.
///
/// A concurrent registration racing on the same email loses at the unique
/// index; that surfaces as [`AuthError::DuplicateEmail`], not a crash.
pub async fn insert_user(
    pool: &PgPool,
    user_name: &str,
    email: &str,
    phone: Option<&str>,
    role: &str,
    password_hash: &str,
) -> Result<User, AuthError> {
    let row = sqlx::query_as::<_, (Uuid, String, String, Option<String>, String)>(
        "INSERT INTO users (user_name, email, phone, role, password_hash) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING id, user_name, email, phone, role",
    )
    .bind(user_name)
    .bind(email)
    .bind(phone)
    .bind(role)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::DuplicateEmail,
        _ => AuthError::Db(e),
    })?;

    let (id, user_name, email, phone, role) = row;
    Ok(User {
        id,
        user_name,
        email,
        phone,
        role,
    })
}
