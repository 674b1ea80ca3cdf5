use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use contracts::shared::response::ApiResponse;
use contracts::system::auth::{LoginRequest, SessionUser};

use crate::shared::error::ApiResult;
use crate::shared::extract::ApiJson;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::session::{self, ROLE_COOKIE, SESSION_COOKIE};
use crate::system::users::service as user_service;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<SessionUser>>)> {
    let (message, user) = user_service::login(&state, &request).await?;
    let token = session::issue_token(&user, &state.config.session)?;

    let jar = jar
        .add(session::session_cookie(token, &state.config.session))
        .add(session::role_cookie(&user, &state.config.session));
    Ok((jar, Json(ApiResponse::ok(message, user))))
}

/// GET /api/auth/session
pub async fn current_session(CurrentUser(user): CurrentUser) -> Json<ApiResponse<SessionUser>> {
    Json(ApiResponse::ok("Session active", user))
}

/// DELETE /api/auth/session
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<()>>) {
    let jar = jar
        .add(session::removal_cookie(SESSION_COOKIE))
        .add(session::removal_cookie(ROLE_COOKIE));
    (jar, Json(ApiResponse::ok("Logged out", ())))
}
