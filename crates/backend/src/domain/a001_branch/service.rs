use contracts::domain::a001_branch::aggregate::{Branch, BranchCreateDto, BranchUpdateDto};
use contracts::domain::common::ListQuery;
use serde_json::json;

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, Listed};
use crate::shared::state::AppState;

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<Branch>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(page, &[("search", query.search.as_deref())]);
    records::list(state.gateway(), &state.sheets().branches, fields).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, Branch)> {
    records::get(state.gateway(), &state.sheets().branches, id).await
}

pub async fn create(state: &AppState, dto: BranchCreateDto) -> ApiResult<GatewayReply> {
    let name = non_blank(dto.name.as_deref())
        .ok_or_else(|| ApiError::bad_request("Branch name is required"))?;

    let fields = records::object(json!({
        "name": name,
        "address": dto.address.unwrap_or_default().trim(),
    }));
    records::create(state.gateway(), &state.sheets().branches, fields).await
}

pub async fn update(state: &AppState, id: &str, dto: BranchUpdateDto) -> ApiResult<GatewayReply> {
    if matches!(&dto.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::bad_request("Branch name cannot be empty"));
    }
    let fields = records::to_fields(&dto)?;
    records::update(state.gateway(), &state.sheets().branches, id, fields).await
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().branches, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::memory::MemoryGateway;
    use crate::test_support::state_with;
    use std::sync::Arc;

    #[tokio::test]
    async fn update_name_keeps_address() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());

        let created = create(
            &state,
            BranchCreateDto {
                name: Some("Cabang Pusat".into()),
                address: Some("Jl. Merdeka 1".into()),
            },
        )
        .await
        .unwrap();
        let id = created.data["id"].as_str().unwrap().to_string();

        update(
            &state,
            &id,
            BranchUpdateDto {
                name: Some("Cabang Utama".into()),
                address: None,
            },
        )
        .await
        .unwrap();

        let (_, branch) = get_by_id(&state, &id).await.unwrap();
        assert_eq!(branch.name, "Cabang Utama");
        assert_eq!(branch.address, "Jl. Merdeka 1");

        let sent = gateway.calls_for(crate::shared::gateway::Action::Update, "branches");
        assert!(!sent[0].fields.contains_key("address"));
    }

    #[tokio::test]
    async fn blank_name_is_rejected_before_upstream() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let err = create(&state, BranchCreateDto::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(gateway.calls().is_empty());
    }
}
