//! Stock bookkeeping after a sale.
//!
//! One task per sold line: read the product, write back `stock - qty`
//! (floored at zero) and `sold + qty`. Lines are independent and a failed one
//! is only logged; there is no rollback and no lock, so two sales of the same
//! product racing each other can lose an update.

use contracts::domain::a006_transaction::aggregate::TransactionItem;
use tokio::task::JoinSet;

use crate::domain::a005_product;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;

#[derive(Debug, Default)]
pub struct ReconciliationReport {
    /// Product ids whose counters were written
    pub updated: Vec<String>,
    /// Product id and reason, for lines that could not be written
    pub failed: Vec<(String, String)>,
    /// Lines without a product or with a non-positive quantity
    pub skipped: usize,
}

/// `(stock, sold)` after selling `quantity`
pub fn next_counters(stock: f64, sold: f64, quantity: f64) -> (f64, f64) {
    ((stock - quantity).max(0.0), sold + quantity)
}

pub async fn execute(state: &AppState, items: &[TransactionItem]) -> ReconciliationReport {
    let mut report = ReconciliationReport::default();
    let mut tasks = JoinSet::new();

    for item in items {
        if item.quantity <= 0.0 || item.product_id.trim().is_empty() {
            report.skipped += 1;
            continue;
        }
        let state = state.clone();
        let product_id = item.product_id.trim().to_string();
        let quantity = item.quantity;
        tasks.spawn(async move {
            let outcome = apply(&state, &product_id, quantity).await;
            (product_id, outcome)
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((product_id, Ok((stock, sold)))) => {
                tracing::debug!("Product {}: stock {} sold {}", product_id, stock, sold);
                report.updated.push(product_id);
            }
            Ok((product_id, Err(e))) => {
                tracing::warn!("Stock update failed for product {}: {}", product_id, e);
                report.failed.push((product_id, e.to_string()));
            }
            Err(e) => {
                tracing::warn!("Stock update task aborted: {}", e);
                report.failed.push((String::new(), e.to_string()));
            }
        }
    }

    report
}

async fn apply(state: &AppState, product_id: &str, quantity: f64) -> ApiResult<(f64, f64)> {
    let (_, product) = a005_product::service::get_by_id(state, product_id).await?;
    let (stock, sold) = next_counters(product.stock, product.sold, quantity);
    a005_product::service::update_stock(state, product_id, stock, sold).await?;
    Ok((stock, sold))
}
