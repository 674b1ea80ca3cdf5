//! Account operations against the users sheet for the logged-in user

use contracts::domain::a004_employee::aggregate::Employee;
use contracts::system::auth::{ChangePasswordRequest, LoginRequest, ProfileUpdateDto, SessionUser};
use serde_json::Value;

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::gateway::{Action, GatewayRequest};
use crate::shared::records::{self, non_blank, strip_password};
use crate::shared::state::AppState;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Upstream checks the credentials; the reply row becomes the session user
pub async fn login(state: &AppState, request: &LoginRequest) -> ApiResult<(String, SessionUser)> {
    let (Some(email), Some(password)) = (
        non_blank(request.email.as_deref()),
        request.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request("Email and password are required"));
    };

    let mut reply = state
        .gateway()
        .call(
            GatewayRequest::new(Action::Login, &state.sheets().users)
                .field("email", email)
                .field("password", password),
        )
        .await?;
    strip_password(&mut reply.data);
    if reply.data.is_null() {
        return Err(ApiError::Upstream("Invalid email or password".into()));
    }

    let employee: Employee = reply.data_as()?;
    tracing::info!("Login: {} ({})", employee.email, employee.role_type);
    Ok((reply.message, SessionUser::from(employee)))
}

pub async fn profile(state: &AppState, user: &SessionUser) -> ApiResult<(String, Employee)> {
    records::get(state.gateway(), &state.sheets().users, &user.id).await
}

/// Returns the refreshed session user
pub async fn update_profile(
    state: &AppState,
    user: &SessionUser,
    dto: ProfileUpdateDto,
) -> ApiResult<(String, SessionUser)> {
    if matches!(&dto.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }
    if matches!(&dto.email, Some(email) if !email.contains('@')) {
        return Err(ApiError::bad_request("Invalid email address"));
    }

    let fields = records::to_fields(&dto)?;
    let mut reply = records::update(state.gateway(), &state.sheets().users, &user.id, fields).await?;
    strip_password(&mut reply.data);

    // Upstream may answer without the row; fall back to what was sent
    let refreshed = match reply.data {
        Value::Object(_) => SessionUser::from(reply.data_as::<Employee>()?),
        _ => SessionUser {
            name: dto.name.unwrap_or_else(|| user.name.clone()),
            email: dto.email.unwrap_or_else(|| user.email.clone()),
            branch_name: dto.branch_name.unwrap_or_else(|| user.branch_name.clone()),
            ..user.clone()
        },
    };
    Ok((reply.message, refreshed))
}

pub async fn change_password(
    state: &AppState,
    user: &SessionUser,
    request: &ChangePasswordRequest,
) -> ApiResult<String> {
    let (Some(current), Some(new)) = (
        request.current_password.as_deref().filter(|p| !p.is_empty()),
        request.new_password.as_deref(),
    ) else {
        return Err(ApiError::bad_request("Current and new password are required"));
    };
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::bad_request(format!(
            "New password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let reply = state
        .gateway()
        .call(
            GatewayRequest::new(Action::ChangePassword, &state.sheets().users)
                .id(&user.id)
                .field("currentPassword", current)
                .field("newPassword", new),
        )
        .await?;
    tracing::info!("Password changed for {}", user.email);
    Ok(reply.message)
}
