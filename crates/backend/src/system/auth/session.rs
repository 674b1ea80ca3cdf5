//! Signed session token carried in the `session` cookie.
//!
//! The token is an HS256 JWT embedding the logged-in user, so attribution
//! fields are only ever taken from data this server signed.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Utc;
use contracts::system::auth::{SessionClaims, SessionUser};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::shared::config::SessionConfig;
use crate::shared::error::{ApiError, ApiResult};

pub const SESSION_COOKIE: &str = "session";
pub const ROLE_COOKIE: &str = "user.role";

/// Sign a session token for `user`
pub fn issue_token(user: &SessionUser, config: &SessionConfig) -> ApiResult<String> {
    if config.secret.is_empty() {
        return Err(ApiError::Internal("session secret is not configured".into()));
    }

    let now = Utc::now();
    let exp = (now + chrono::Duration::days(config.max_age_days)).timestamp() as usize;
    let claims = SessionClaims {
        user: user.clone(),
        exp,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("failed to sign session token: {}", e)))
}

/// Check signature and expiry
pub fn verify_token(token: &str, config: &SessionConfig) -> ApiResult<SessionUser> {
    if config.secret.is_empty() {
        return Err(ApiError::Unauthorized);
    }

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.user)
    .map_err(|e| {
        tracing::debug!("Rejected session token: {}", e);
        ApiError::Unauthorized
    })
}

fn max_age(config: &SessionConfig) -> time::Duration {
    time::Duration::days(config.max_age_days)
}

pub fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(max_age(config))
        .build()
}

/// Readable by the browser; only drives page redirects
pub fn role_cookie(user: &SessionUser, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((ROLE_COOKIE, user.role_type.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(max_age(config))
        .build()
}

/// Expired, empty cookie; sent even when the request carried none
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::RoleType;

    fn config() -> SessionConfig {
        SessionConfig {
            secret: "unit-test-secret".into(),
            max_age_days: 7,
        }
    }

    fn user() -> SessionUser {
        SessionUser {
            id: "U1".into(),
            name: "Siti".into(),
            email: "siti@langgeng.id".into(),
            role_type: RoleType::Karyawan,
            branch_name: "Cabang Pusat".into(),
        }
    }

    #[test]
    fn token_round_trip() {
        let token = issue_token(&user(), &config()).unwrap();
        assert_eq!(verify_token(&token, &config()).unwrap(), user());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = issue_token(&user(), &config()).unwrap();
        let other = SessionConfig {
            secret: "someone-else".into(),
            max_age_days: 7,
        };
        assert!(matches!(verify_token(&token, &other), Err(ApiError::Unauthorized)));
        assert!(matches!(
            verify_token("not.a.token", &config()),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let expired = SessionConfig {
            secret: "unit-test-secret".into(),
            max_age_days: -1,
        };
        let token = issue_token(&user(), &expired).unwrap();
        assert!(matches!(verify_token(&token, &config()), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn cookie_attributes() {
        let cookie = session_cookie("abc".into(), &config());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(7)));

        let role = role_cookie(&user(), &config());
        assert_eq!(role.value(), "karyawan");
        assert_ne!(role.http_only(), Some(true));
    }
}
