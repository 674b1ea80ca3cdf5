use contracts::domain::a007_cash_log::aggregate::{CashLog, CashLogCreateDto, CashLogUpdateDto};
use contracts::domain::common::ListQuery;
use contracts::enums::ApprovalStatus;
use contracts::system::auth::SessionUser;
use serde_json::{json, Value};

use crate::domain::common::approval::{self, CurrentApproval};
use crate::domain::common::clock;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::format::format_rupiah;
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, Listed};
use crate::shared::state::AppState;

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<CashLog>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(
        page,
        &[
            ("branch_name", query.branch_name.as_deref()),
            ("status", query.status.as_deref()),
            ("type", query.log_type.as_deref()),
            ("cashier_name", query.cashier_name.as_deref()),
            ("date", query.date.as_deref()),
        ],
    );
    records::list(state.gateway(), &state.sheets().cash_logs, fields).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, CashLog)> {
    records::get(state.gateway(), &state.sheets().cash_logs, id).await
}

/// Opening cash is approved on entry; closing cash waits for an admin
pub async fn create(state: &AppState, user: &SessionUser, dto: CashLogCreateDto) -> ApiResult<GatewayReply> {
    let (Some(amount), Some(log_type)) = (dto.amount, dto.log_type) else {
        return Err(ApiError::bad_request("Amount and type are required"));
    };

    let status = log_type.initial_status();
    let mut fields = records::object(json!({
        "date": non_blank(dto.date.as_deref()).map(str::to_string).unwrap_or_else(clock::today),
        "amount": amount,
        "cashier_name": non_blank(dto.cashier_name.as_deref()).unwrap_or(&user.name),
        "branch_name": non_blank(dto.branch_name.as_deref()).unwrap_or(&user.branch_name),
        "type": log_type.as_str(),
        "status": status.as_str(),
        "approved_by": "",
        "approved_at": "",
    }));
    if status == ApprovalStatus::Approved {
        fields.insert("approved_by".into(), Value::from(user.name.as_str()));
        fields.insert("approved_at".into(), Value::from(clock::now_iso()));
    }

    let reply = records::create(state.gateway(), &state.sheets().cash_logs, fields).await?;
    tracing::info!(
        "Cash log {} of {} by {} ({})",
        log_type,
        format_rupiah(amount),
        user.name,
        status
    );
    Ok(reply)
}

pub async fn update(
    state: &AppState,
    user: &SessionUser,
    id: &str,
    dto: CashLogUpdateDto,
) -> ApiResult<GatewayReply> {
    let mut fields = records::to_fields(&dto)?;

    if let Some(requested) = dto.status.filter(ApprovalStatus::is_decision) {
        let (_, current) = get_by_id(state, id).await?;
        let stamp = approval::stamp_now(
            requested,
            CurrentApproval {
                status: &current.status,
                approved_by: &current.approved_by,
                approved_at: &current.approved_at,
            },
            dto.approved_by.as_deref(),
            dto.approved_at.as_deref(),
            &user.name,
        );
        fields.extend(stamp);
    }

    records::update(state.gateway(), &state.sheets().cash_logs, id, fields).await
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().cash_logs, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::memory::MemoryGateway;
    use crate::test_support::{cashier, state_with};
    use contracts::enums::CashLogType;
    use std::sync::Arc;

    fn entry(log_type: CashLogType) -> CashLogCreateDto {
        CashLogCreateDto {
            amount: Some(500_000.0),
            log_type: Some(log_type),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn opening_cash_is_auto_approved() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let reply = create(&state, &cashier(), entry(CashLogType::OpeningCash)).await.unwrap();
        assert_eq!(reply.data["status"], "approved");
        assert_eq!(reply.data["approved_by"], "Sari");
        assert_ne!(reply.data["approved_at"], "");
        assert_eq!(reply.data["cashier_name"], "Sari");
        assert_eq!(reply.data["branch_name"], "Cabang Pusat");
        assert_eq!(reply.data["date"].as_str().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn closing_cash_waits_for_approval() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let reply = create(&state, &cashier(), entry(CashLogType::ClosingCash)).await.unwrap();
        assert_eq!(reply.data["status"], "pending");
        assert_eq!(reply.data["approved_by"], "");
    }

    #[tokio::test]
    async fn amount_is_required() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let err = create(
            &state,
            &cashier(),
            CashLogCreateDto {
                log_type: Some(CashLogType::ClosingCash),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn approving_twice_keeps_first_stamp() {
        let gateway = Arc::new(MemoryGateway::new());
        gateway.insert(
            "cash_logs",
            json!({"id": "4", "type": "closing_cash", "amount": 750000, "status": "pending"}),
        );
        let state = state_with(gateway.clone());
        let approve = || CashLogUpdateDto {
            status: Some(ApprovalStatus::Approved),
            ..Default::default()
        };

        let first = SessionUser {
            name: "Admin Satu".into(),
            ..cashier()
        };
        update(&state, &first, "4", approve()).await.unwrap();
        let stamped = gateway.row("cash_logs", "4").unwrap();
        assert_eq!(stamped["approved_by"], "Admin Satu");

        let second = SessionUser {
            name: "Admin Dua".into(),
            ..cashier()
        };
        update(&state, &second, "4", approve()).await.unwrap();
        let again = gateway.row("cash_logs", "4").unwrap();
        assert_eq!(again["approved_by"], "Admin Satu");
        assert_eq!(again["approved_at"], stamped["approved_at"]);
        assert_eq!(again["status"], "approved");
    }
}
