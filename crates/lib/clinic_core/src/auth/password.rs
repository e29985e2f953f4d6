//! Password hashing via bcrypt.

use super::AuthError;

/// bcrypt cost factor.
const BCRYPT_COST: u32 = 12;

/// bcrypt only reads the first 72 bytes of input.
const BCRYPT_MAX_BYTES: usize = 72;

/// Hash a password with bcrypt (cost 12).
///
/// Input longer than 72 UTF-8 bytes is truncated at a character boundary
/// before hashing; [`verify_password`] applies the same truncation, so
/// over-long passwords still round-trip.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(truncate_to_limit(password), BCRYPT_COST)
        .map_err(|e| AuthError::Hashing(format!("bcrypt hash: {e}")))
}

/// Verify a password against a bcrypt hash.
///
/// Returns `false` for any mismatch, including a malformed stored hash —
/// verification failure is an expected outcome, not an error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(truncate_to_limit(password), hash).unwrap_or(false)
}

/// Cut the input down to at most 72 bytes without splitting a character.
fn truncate_to_limit(password: &str) -> &str {
    if password.len() <= BCRYPT_MAX_BYTES {
        return password;
    }
    let mut end = BCRYPT_MAX_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}
