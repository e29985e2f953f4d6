//! Access-token encode/decode.
//!
//! Tokens are compact JWS strings signed with a single server-wide secret and
//! algorithm, both fixed at process start. All timestamps are UTC.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};

pub use jsonwebtoken::Algorithm;

use super::AuthError;
use crate::models::auth::TokenClaims;

/// Outcome of decoding a bearer token.
///
/// Anything other than `Valid` is treated upstream as unauthenticated; the
/// variants stay distinguishable so the rejection reason can be logged.
#[derive(Debug)]
pub enum TokenOutcome {
    Valid(TokenClaims),
    Expired,
    Malformed,
}

/// Issue a signed access token for `subject`, expiring `ttl` from now.
pub fn issue(
    subject: &str,
    ttl: Duration,
    secret: &[u8],
    algorithm: Algorithm,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: subject.to_string(),
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
    };
    jsonwebtoken::encode(
        &Header::new(algorithm),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Token(format!("jwt encode: {e}")))
}

/// Decode and verify a bearer token.
///
/// Signature is checked against the configured secret and algorithm, expiry
/// against the current UTC time with zero leeway. Tokens signed with any
/// other secret or algorithm decode as `Malformed`.
pub fn decode(token: &str, secret: &[u8], algorithm: Algorithm) -> TokenOutcome {
    let mut validation = Validation::new(algorithm);
    validation.leeway = 0;
    match jsonwebtoken::decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
    {
        Ok(data) => TokenOutcome::Valid(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => TokenOutcome::Expired,
            _ => TokenOutcome::Malformed,
        },
    }
}
