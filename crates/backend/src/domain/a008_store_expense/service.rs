use contracts::domain::a008_store_expense::aggregate::{
    StoreExpense, StoreExpenseCreateDto, StoreExpenseUpdateDto,
};
use contracts::domain::common::ListQuery;
use contracts::enums::ApprovalStatus;
use contracts::system::auth::SessionUser;
use serde_json::json;

use crate::domain::common::approval::{self, CurrentApproval};
use crate::domain::common::clock;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::format::format_rupiah;
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, Listed};
use crate::shared::state::AppState;

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<StoreExpense>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(
        page,
        &[
            ("branch_name", query.branch_name.as_deref()),
            ("status", query.status.as_deref()),
            ("category", query.category.as_deref()),
            ("date", query.date.as_deref()),
        ],
    );
    records::list(state.gateway(), &state.sheets().store_expenses, fields).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, StoreExpense)> {
    records::get(state.gateway(), &state.sheets().store_expenses, id).await
}

pub async fn create(
    state: &AppState,
    user: &SessionUser,
    dto: StoreExpenseCreateDto,
) -> ApiResult<GatewayReply> {
    let (Some(amount), Some(category)) = (dto.amount, dto.category) else {
        return Err(ApiError::bad_request("Amount and category are required"));
    };

    let fields = records::object(json!({
        "date": non_blank(dto.date.as_deref()).map(str::to_string).unwrap_or_else(clock::today),
        "category": category.as_str(),
        "amount": amount,
        "description": dto.description.unwrap_or_default(),
        "branch_name": non_blank(dto.branch_name.as_deref()).unwrap_or(&user.branch_name),
        "cashier_name": non_blank(dto.cashier_name.as_deref()).unwrap_or(&user.name),
        "receipt_url": dto.receipt_url.unwrap_or_default(),
        "status": ApprovalStatus::Pending.as_str(),
        "approved_by": "",
        "approved_at": "",
    }));

    let reply = records::create(state.gateway(), &state.sheets().store_expenses, fields).await?;
    tracing::info!(
        "Expense report ({}) of {} filed by {}",
        category,
        format_rupiah(amount),
        user.name
    );
    Ok(reply)
}

pub async fn update(
    state: &AppState,
    user: &SessionUser,
    id: &str,
    dto: StoreExpenseUpdateDto,
) -> ApiResult<GatewayReply> {
    let mut fields = records::to_fields(&dto)?;

    if let Some(requested) = dto.status.filter(ApprovalStatus::is_decision) {
        let (_, current) = get_by_id(state, id).await?;
        fields.extend(approval::stamp_now(
            requested,
            CurrentApproval {
                status: &current.status,
                approved_by: &current.approved_by,
                approved_at: &current.approved_at,
            },
            dto.approved_by.as_deref(),
            dto.approved_at.as_deref(),
            &user.name,
        ));
    }

    records::update(state.gateway(), &state.sheets().store_expenses, id, fields).await
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().store_expenses, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::memory::MemoryGateway;
    use crate::test_support::{cashier, state_with};
    use contracts::enums::ExpenseCategory;
    use std::sync::Arc;

    #[tokio::test]
    async fn new_report_is_pending_and_attributed() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let reply = create(
            &state,
            &cashier(),
            StoreExpenseCreateDto {
                amount: Some(120_000.0),
                category: Some(ExpenseCategory::Listrik),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(reply.data["status"], "pending");
        assert_eq!(reply.data["category"], "listrik");
        assert_eq!(reply.data["cashier_name"], "Sari");
        assert_eq!(reply.data["receipt_url"], "");
    }

    #[tokio::test]
    async fn rejection_is_stamped_with_approver() {
        let gateway = Arc::new(MemoryGateway::new());
        gateway.insert(
            "store_expenses",
            json!({"id": "2", "category": "air", "amount": 80000, "status": "pending"}),
        );
        let state = state_with(gateway.clone());

        update(
            &state,
            &cashier(),
            "2",
            StoreExpenseUpdateDto {
                status: Some(ApprovalStatus::Rejected),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let row = gateway.row("store_expenses", "2").unwrap();
        assert_eq!(row["status"], "rejected");
        assert_eq!(row["approved_by"], "Sari");
        assert!(row["approved_at"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn approving_missing_report_is_not_found() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let err = update(
            &state,
            &cashier(),
            "404",
            StoreExpenseUpdateDto {
                status: Some(ApprovalStatus::Approved),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
