//! Authentication service — credential verification, token issuance, and
//! bearer-token resolution over `clinic_core::auth`.

use chrono::Duration;
use sqlx::PgPool;
use tracing::debug;

use clinic_core::auth::jwt::{self, TokenOutcome};
use clinic_core::auth::{password, queries};
use clinic_core::models::auth::User;

use crate::config::TokenConfig;
use crate::error::AppResult;

/// Role assigned to newly registered identities.
const DEFAULT_ROLE: &str = "admin";

/// Verify an email + password pair.
///
/// Returns `Ok(None)` for an unknown email and for a wrong password alike —
/// the two rejections are deliberately indistinguishable so callers cannot
/// leak account existence. Only infrastructure failures are `Err`.
pub async fn authenticate(pool: &PgPool, email: &str, password_input: &str) -> AppResult<Option<User>> {
    let Some(stored) = queries::find_user_by_email(pool, email).await? else {
        return Ok(None);
    };
    if !password::verify_password(password_input, &stored.password_hash) {
        return Ok(None);
    }
    Ok(Some(stored.user))
}

/// Issue a bearer token for a verified identity.
///
/// Claims are `{sub: email, exp: now + ttl, iat: now}`; `ttl` falls back to
/// the configured minutes value when the caller does not override it.
pub fn issue_token(
    identity: &User,
    ttl: Option<Duration>,
    token_config: &TokenConfig,
) -> AppResult<String> {
    let ttl = ttl.unwrap_or_else(|| Duration::minutes(token_config.ttl_minutes));
    let token = jwt::issue(
        &identity.email,
        ttl,
        token_config.secret.as_bytes(),
        token_config.algorithm,
    )?;
    Ok(token)
}

/// Resolve a bearer token to the current identity.
///
/// Decode failure, a missing subject, and a subject whose identity no longer
/// exists all come back as `Ok(None)`; the store is re-read on every call, so
/// deleted accounts drop out without any revocation machinery.
pub async fn resolve_current_user(
    pool: &PgPool,
    token: &str,
    token_config: &TokenConfig,
) -> AppResult<Option<User>> {
    let claims = match jwt::decode(
        token,
        token_config.secret.as_bytes(),
        token_config.algorithm,
    ) {
        TokenOutcome::Valid(claims) => claims,
        TokenOutcome::Expired => {
            debug!("bearer token expired");
            return Ok(None);
        }
        TokenOutcome::Malformed => {
            debug!("bearer token rejected");
            return Ok(None);
        }
    };

    let Some(stored) = queries::find_user_by_email(pool, &claims.sub).await? else {
        debug!("token subject no longer exists");
        return Ok(None);
    };
    Ok(Some(stored.user))
}

/// Register a new identity.
///
/// The email is re-checked before the insert so a taken address is a clean
/// rejection; a concurrent registration that slips between the check and the
/// insert loses at the store's unique index and surfaces the same way.
pub async fn register(
    pool: &PgPool,
    user_name: &str,
    email: &str,
    phone: &str,
    password_input: &str,
) -> AppResult<User> {
    if queries::email_exists(pool, email).await? {
        return Err(clinic_core::auth::AuthError::DuplicateEmail.into());
    }
    let hash = password::hash_password(password_input)?;
    let user =
        queries::insert_user(pool, user_name, email, Some(phone), DEFAULT_ROLE, &hash).await?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_core::auth::jwt::Algorithm;

    fn test_identity() -> User {
        User {
            id: uuid::Uuid::new_v4(),
            user_name: "Asha Rai".into(),
            email: "a@x.com".into(),
            phone: Some("555-0101".into()),
            role: "admin".into(),
        }
    }

    fn test_config() -> TokenConfig {
        TokenConfig {
            secret: "test-secret".into(),
            algorithm: Algorithm::HS256,
            ttl_minutes: 30,
        }
    }

    #[test]
    fn issued_token_resolves_to_the_issuing_identity() {
        let config = test_config();
        let token = issue_token(&test_identity(), None, &config).expect("issue");
        match jwt::decode(&token, config.secret.as_bytes(), config.algorithm) {
            TokenOutcome::Valid(claims) => {
                assert_eq!(claims.sub, "a@x.com");
                // Default TTL comes from configuration.
                assert_eq!(claims.exp - claims.iat, 30 * 60);
            }
            other => panic!("expected Valid, got {other:?}"),
        }
    }

    #[test]
    fn explicit_ttl_overrides_the_configured_default() {
        let config = test_config();
        let token = issue_token(&test_identity(), Some(Duration::minutes(5)), &config)
            .expect("issue");
        match jwt::decode(&token, config.secret.as_bytes(), config.algorithm) {
            TokenOutcome::Valid(claims) => assert_eq!(claims.exp - claims.iat, 5 * 60),
            other => panic!("expected Valid, got {other:?}"),
        }
    }
}
