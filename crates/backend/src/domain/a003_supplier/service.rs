use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierCreateDto, SupplierUpdateDto};
use contracts::domain::common::ListQuery;
use serde_json::json;

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, Listed};
use crate::shared::state::AppState;

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<Supplier>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(page, &[("search", query.search.as_deref())]);
    records::list(state.gateway(), &state.sheets().suppliers, fields).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, Supplier)> {
    records::get(state.gateway(), &state.sheets().suppliers, id).await
}

pub async fn create(state: &AppState, dto: SupplierCreateDto) -> ApiResult<GatewayReply> {
    let name = non_blank(dto.name.as_deref())
        .ok_or_else(|| ApiError::bad_request("Supplier name is required"))?;

    let fields = records::object(json!({
        "name": name,
        "contact_person": dto.contact_person.unwrap_or_default(),
        "phone": dto.phone.unwrap_or_default(),
        "email": dto.email.unwrap_or_default(),
        "address": dto.address.unwrap_or_default(),
        "is_active": dto.is_active.unwrap_or(true),
    }));
    records::create(state.gateway(), &state.sheets().suppliers, fields).await
}

pub async fn update(state: &AppState, id: &str, dto: SupplierUpdateDto) -> ApiResult<GatewayReply> {
    if matches!(&dto.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::bad_request("Supplier name cannot be empty"));
    }
    let fields = records::to_fields(&dto)?;
    records::update(state.gateway(), &state.sheets().suppliers, id, fields).await
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().suppliers, id).await
}
