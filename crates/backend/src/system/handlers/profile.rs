use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use contracts::domain::a004_employee::aggregate::Employee;
use contracts::shared::response::ApiResponse;
use contracts::system::auth::{ChangePasswordRequest, ProfileUpdateDto, SessionUser};

use crate::shared::error::ApiResult;
use crate::shared::extract::ApiJson;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::session;
use crate::system::users::service as user_service;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ApiResponse<Employee>>> {
    let (message, employee) = user_service::profile(&state, &user).await?;
    Ok(Json(ApiResponse::ok(message, employee)))
}

/// PUT /api/profile; the session cookie is re-signed with the new details
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
    ApiJson(dto): ApiJson<ProfileUpdateDto>,
) -> ApiResult<(CookieJar, Json<ApiResponse<SessionUser>>)> {
    let (message, refreshed) = user_service::update_profile(&state, &user, dto).await?;
    let token = session::issue_token(&refreshed, &state.config.session)?;
    let jar = jar
        .add(session::session_cookie(token, &state.config.session))
        .add(session::role_cookie(&refreshed, &state.config.session));
    Ok((jar, Json(ApiResponse::ok(message, refreshed))))
}

/// POST /api/profile/password
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ApiJson(request): ApiJson<ChangePasswordRequest>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let message = user_service::change_password(&state, &user, &request).await?;
    Ok(Json(ApiResponse::ok(message, ())))
}
