use contracts::domain::a002_category::aggregate::{Category, CategoryCreateDto, CategoryUpdateDto};
use contracts::domain::common::ListQuery;
use serde_json::json;

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, Listed};
use crate::shared::state::AppState;

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<Category>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(page, &[("search", query.search.as_deref())]);
    records::list(state.gateway(), &state.sheets().categories, fields).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, Category)> {
    records::get(state.gateway(), &state.sheets().categories, id).await
}

pub async fn create(state: &AppState, dto: CategoryCreateDto) -> ApiResult<GatewayReply> {
    let name = non_blank(dto.name.as_deref())
        .ok_or_else(|| ApiError::bad_request("Category name is required"))?;

    let fields = records::object(json!({
        "name": name,
        "is_active": dto.is_active.unwrap_or(true),
    }));
    records::create(state.gateway(), &state.sheets().categories, fields).await
}

pub async fn update(state: &AppState, id: &str, dto: CategoryUpdateDto) -> ApiResult<GatewayReply> {
    if matches!(&dto.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::bad_request("Category name cannot be empty"));
    }
    let fields = records::to_fields(&dto)?;
    records::update(state.gateway(), &state.sheets().categories, id, fields).await
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().categories, id).await
}
