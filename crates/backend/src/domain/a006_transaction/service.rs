use chrono::Local;
use contracts::domain::a006_transaction::aggregate::{
    Transaction, TransactionCreateDto, TransactionItem, TransactionUpdateDto,
};
use contracts::domain::common::ListQuery;
use contracts::enums::PaymentStatus;
use contracts::system::auth::SessionUser;
use rand::Rng;
use serde_json::{json, Map, Value};

use super::settlement::Settlement;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::format::format_rupiah;
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, Listed};
use crate::shared::state::AppState;
use crate::usecases::u501_stock_reconciliation;

/// `TRX-<yyyyMMddHHmmss>-<4 digits>`
pub fn generate_number() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..10000);
    format!("TRX-{}-{}", Local::now().format("%Y%m%d%H%M%S"), suffix)
}

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<Transaction>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(
        page,
        &[
            ("branch_name", query.branch_name.as_deref()),
            ("status", query.status.as_deref()),
            ("payment_status", query.payment_status.as_deref()),
            ("search", query.search.as_deref()),
        ],
    );
    records::list(state.gateway(), &state.sheets().transactions, fields).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, Transaction)> {
    records::get(state.gateway(), &state.sheets().transactions, id).await
}

/// Records a sale, then moves stock for every line when the goods left the
/// store. The reply is the one for the transaction row; stock updates that
/// fail are logged and do not change it.
pub async fn create(
    state: &AppState,
    user: &SessionUser,
    dto: TransactionCreateDto,
) -> ApiResult<GatewayReply> {
    let (Some(subtotal), Some(total)) = (dto.subtotal, dto.total) else {
        return Err(ApiError::bad_request("Subtotal and total are required"));
    };
    let branch_name = non_blank(dto.branch_name.as_deref())
        .ok_or_else(|| ApiError::bad_request("Branch name is required"))?;

    let paid_amount = dto.paid_amount.unwrap_or(0.0);
    let is_credit = dto.is_credit.unwrap_or(false);
    let settlement = Settlement::compute(total, paid_amount, is_credit);
    let items: Vec<TransactionItem> = dto.items.iter().map(|item| item.normalize()).collect();
    let number = non_blank(dto.transaction_number.as_deref())
        .map(str::to_string)
        .unwrap_or_else(generate_number);

    let fields = records::object(json!({
        "transaction_number": number,
        "customer_name": dto.customer_name.unwrap_or_default(),
        "subtotal": subtotal,
        "discount": dto.discount.unwrap_or(0.0),
        "total": total,
        "paid_amount": paid_amount,
        "due_amount": settlement.due_amount,
        "is_credit": is_credit,
        "payment_method": non_blank(dto.payment_method.as_deref()).unwrap_or("cash"),
        "payment_status": settlement.payment_status.as_str(),
        "status": settlement.status.as_str(),
        "items": items,
        "branch_name": branch_name,
        "created_by": user.name,
    }));

    let reply = records::create(state.gateway(), &state.sheets().transactions, fields).await?;
    tracing::info!(
        "Transaction {} at {}: {} item(s), {} ({}, {})",
        number,
        branch_name,
        items.len(),
        format_rupiah(total),
        settlement.status,
        settlement.payment_status
    );

    if settlement.moves_stock() {
        let report = u501_stock_reconciliation::execute(state, &items).await;
        if !report.failed.is_empty() {
            tracing::warn!(
                "Transaction {}: stock not updated for {} of {} product(s)",
                number,
                report.failed.len(),
                report.failed.len() + report.updated.len()
            );
        }
    }

    Ok(reply)
}

/// Partial update. A new `paid_amount` without an explicit `payment_status`
/// re-derives the payment columns against the stored total.
pub async fn update(state: &AppState, id: &str, dto: TransactionUpdateDto) -> ApiResult<GatewayReply> {
    let mut fields = Map::new();
    let mut put = |key: &str, value: Value| {
        fields.insert(key.to_string(), value);
    };

    if let Some(v) = &dto.customer_name {
        put("customer_name", json!(v));
    }
    if let Some(v) = dto.subtotal {
        put("subtotal", json!(v));
    }
    if let Some(v) = dto.discount {
        put("discount", json!(v));
    }
    if let Some(v) = dto.total {
        put("total", json!(v));
    }
    if let Some(v) = dto.paid_amount {
        put("paid_amount", json!(v));
    }
    if let Some(v) = dto.due_amount {
        put("due_amount", json!(v));
    }
    if let Some(v) = dto.is_credit {
        put("is_credit", json!(v));
    }
    if let Some(v) = &dto.payment_method {
        put("payment_method", json!(v));
    }
    if let Some(v) = dto.payment_status {
        put("payment_status", json!(v.as_str()));
    }
    if let Some(v) = dto.status {
        put("status", json!(v.as_str()));
    }
    if let Some(v) = &dto.branch_name {
        put("branch_name", json!(v));
    }
    if let Some(items) = &dto.items {
        let items: Vec<TransactionItem> = items.iter().map(|item| item.normalize()).collect();
        put("items", json!(items));
    }

    if let (Some(paid_amount), None) = (dto.paid_amount, dto.payment_status) {
        let total = match dto.total {
            Some(total) => total,
            None => get_by_id(state, id).await?.1.total,
        };
        fields.insert(
            "payment_status".into(),
            json!(PaymentStatus::derive(paid_amount, total).as_str()),
        );
        if dto.due_amount.is_none() {
            fields.insert("due_amount".into(), json!((total - paid_amount).max(0.0)));
        }
    }

    records::update(state.gateway(), &state.sheets().transactions, id, fields).await
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().transactions, id).await
}
