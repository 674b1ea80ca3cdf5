use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;
use contracts::system::auth::SessionUser;

use super::session::{verify_token, SESSION_COOKIE};
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

/// Extractor for the logged-in user from the signed `session` cookie
/// Usage in handlers: `async fn handler(CurrentUser(user): CurrentUser) -> ...`
pub struct CurrentUser(pub SessionUser);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(ApiError::Unauthorized)?;
        verify_token(&token, &state.config.session).map(CurrentUser)
    }
}
