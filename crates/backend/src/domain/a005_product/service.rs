use contracts::domain::a005_product::aggregate::{Product, ProductCreateDto, ProductUpdateDto};
use contracts::domain::common::ListQuery;
use serde_json::json;

use super::barcode;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::gateway::GatewayReply;
use crate::shared::pagination::PageRequest;
use crate::shared::records::{self, non_blank, Listed};
use crate::shared::state::AppState;

pub async fn list(state: &AppState, query: &ListQuery) -> ApiResult<Listed<Product>> {
    let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());
    let fields = records::list_fields(
        page,
        &[
            ("branch_name", query.branch_name.as_deref()),
            ("category_id", query.category_id.as_deref()),
            ("category_name", query.category_name.as_deref()),
            ("supplier_name", query.supplier_name.as_deref()),
            ("search", query.search.as_deref()),
        ],
    );
    records::list(state.gateway(), &state.sheets().products, fields).await
}

/// Every product row, for views that filter locally
pub async fn list_all(state: &AppState) -> ApiResult<Vec<Product>> {
    records::list_all(state.gateway(), &state.sheets().products).await
}

pub async fn get_by_id(state: &AppState, id: &str) -> ApiResult<(String, Product)> {
    records::get(state.gateway(), &state.sheets().products, id).await
}

pub async fn create(state: &AppState, dto: ProductCreateDto) -> ApiResult<GatewayReply> {
    let name = non_blank(dto.name.as_deref())
        .ok_or_else(|| ApiError::bad_request("Product name is required"))?;
    let price = dto
        .price
        .ok_or_else(|| ApiError::bad_request("Product price is required"))?;

    let barcode = match non_blank(dto.barcode.as_deref()) {
        Some(code) => code.to_string(),
        None => barcode::generate(),
    };

    let fields = records::object(json!({
        "name": name,
        "price": price,
        "modal": dto.modal.unwrap_or(0.0),
        "stock": dto.stock.unwrap_or(0.0),
        "sold": dto.sold.unwrap_or(0.0),
        "size": dto.size.unwrap_or_default(),
        "unit": dto.unit.unwrap_or_default(),
        "image_url": dto.image_url.unwrap_or_default(),
        "category_id": dto.category_id.unwrap_or_default(),
        "category_name": dto.category_name.unwrap_or_default(),
        "barcode": barcode,
        "is_active": dto.is_active.unwrap_or(true),
        "min_stock": dto.min_stock.unwrap_or(0.0),
        "description": dto.description.unwrap_or_default(),
        "supplier_id": dto.supplier_id.unwrap_or_default(),
        "supplier_name": dto.supplier_name.unwrap_or_default(),
        "expiration_date": dto.expiration_date.unwrap_or_default(),
        "created_by": dto.created_by.unwrap_or_default(),
        "branch_id": dto.branch_id.unwrap_or_default(),
        "branch_name": dto.branch_name.unwrap_or_default(),
    }));
    records::create(state.gateway(), &state.sheets().products, fields).await
}

pub async fn update(state: &AppState, id: &str, dto: ProductUpdateDto) -> ApiResult<GatewayReply> {
    if matches!(&dto.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::bad_request("Product name cannot be empty"));
    }
    let fields = records::to_fields(&dto)?;
    records::update(state.gateway(), &state.sheets().products, id, fields).await
}

/// Writes back the two counters moved by a sale
pub async fn update_stock(state: &AppState, id: &str, stock: f64, sold: f64) -> ApiResult<GatewayReply> {
    update(state, id, ProductUpdateDto::stock_movement(stock, sold)).await
}

pub async fn delete(state: &AppState, id: &str) -> ApiResult<GatewayReply> {
    records::delete(state.gateway(), &state.sheets().products, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::gateway::memory::MemoryGateway;
    use crate::test_support::state_with;
    use std::sync::Arc;

    #[tokio::test]
    async fn defaults_and_generated_barcode() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let reply = create(
            &state,
            ProductCreateDto {
                name: Some("Minyak Goreng 1L".into()),
                price: Some(18000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(reply.data["stock"].as_f64(), Some(0.0));
        assert_eq!(reply.data["min_stock"].as_f64(), Some(0.0));
        assert_eq!(reply.data["unit"], "");
        assert_eq!(reply.data["is_active"], true);
        let code = reply.data["barcode"].as_str().unwrap();
        assert!(code.starts_with("899") && code.len() == 13);
    }

    #[tokio::test]
    async fn supplied_barcode_is_kept() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let reply = create(
            &state,
            ProductCreateDto {
                name: Some("Gula 1kg".into()),
                price: Some(15000.0),
                barcode: Some("8990000000017".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(reply.data["barcode"], "8990000000017");
    }

    #[tokio::test]
    async fn price_is_required() {
        let gateway = Arc::new(MemoryGateway::new());
        let state = state_with(gateway.clone());
        let err = create(
            &state,
            ProductCreateDto {
                name: Some("Gula 1kg".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m.contains("price")));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn stock_update_touches_two_columns() {
        let gateway = Arc::new(MemoryGateway::new());
        gateway.insert("products", json!({"id": "9", "name": "Teh", "stock": 10, "sold": 1, "price": 5000}));
        let state = state_with(gateway.clone());

        update_stock(&state, "9", 7.0, 4.0).await.unwrap();

        let row = gateway.row("products", "9").unwrap();
        assert_eq!(row["stock"].as_f64(), Some(7.0));
        assert_eq!(row["sold"].as_f64(), Some(4.0));
        assert_eq!(row["price"].as_f64(), Some(5000.0));
    }
}
