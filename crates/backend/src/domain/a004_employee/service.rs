use contracts::domain::a004_employee::aggregate::{Employee, EmployeeCreateDto, EmployeeUpdateDto};
use contracts::domain::common::ListQuery;
use serde_json::json;

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, strip_password, Listed};
use crate::shared::state::AppState;

fn check_email(email: &str) -> ApiResult<()> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(ApiError::bad_request("Invalid email address"))
    }
}

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<Employee>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(
        page,
        &[
            ("branchName", query.branch_name.as_deref()),
            ("roleType", query.role_type.as_deref()),
            ("search", query.search.as_deref()),
        ],
    );
    records::list(state.gateway(), &state.sheets().users, fields).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, Employee)> {
    records::get(state.gateway(), &state.sheets().users, id).await
}

/// The create reply is the only one that still carries the password
pub async fn create(state: &AppState, dto: EmployeeCreateDto) -> ApiResult<GatewayReply> {
    let (Some(name), Some(email), Some(password)) = (
        non_blank(dto.name.as_deref()),
        non_blank(dto.email.as_deref()),
        non_blank(dto.password.as_deref()),
    ) else {
        return Err(ApiError::bad_request("Name, email and password are required"));
    };
    check_email(email)?;

    let role = dto.role_type.unwrap_or_default();
    let fields = records::object(json!({
        "name": name,
        "email": email,
        "password": password,
        "roleType": role.as_str(),
        "branchName": dto.branch_name.unwrap_or_default(),
    }));
    let reply = records::create(state.gateway(), &state.sheets().users, fields).await?;
    tracing::info!("Employee account created: {} ({})", email, role);
    Ok(reply)
}

pub async fn update(state: &AppState, id: &str, dto: EmployeeUpdateDto) -> ApiResult<GatewayReply> {
    if matches!(&dto.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }
    if let Some(email) = &dto.email {
        check_email(email)?;
    }
    if matches!(&dto.password, Some(password) if password.is_empty()) {
        return Err(ApiError::bad_request("Password cannot be empty"));
    }
    let fields = records::to_fields(&dto)?;
    let mut reply = records::update(state.gateway(), &state.sheets().users, id, fields).await?;
    strip_password(&mut reply.data);
    Ok(reply)
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().users, id).await
}
