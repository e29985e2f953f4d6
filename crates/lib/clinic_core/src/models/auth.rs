//! Identity domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored identity, as exposed to the rest of the application.
///
/// The password hash deliberately lives on [`UserWithPassword`] so it can
/// never leak through onward serialization of a `User`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Free-text role label; stored but never branched on for access control.
    pub role: String,
}

/// Identity plus stored password hash, for the login path only.
#[derive(Debug, Clone)]
pub struct UserWithPassword {
    pub user: User,
    pub password_hash: String,
}

/// Claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — the identity's email.
    pub sub: String,
    /// Expiry (unix timestamp). Always issued-at plus the configured TTL.
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}
