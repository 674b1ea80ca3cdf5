use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a005_product::aggregate::{Product, ProductCreateDto, ProductUpdateDto};
use contracts::domain::common::ListQuery;
use contracts::shared::response::ApiResponse;
use serde_json::Value;

use crate::domain::a005_product::service;
use crate::shared::error::ApiResult;
use crate::shared::extract::ApiJson;
use crate::shared::records::reply_envelope;
use crate::shared::state::AppState;

/// GET /api/products
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Product>>>> {
    Ok(Json(service::list(&state, &query).await?.into_envelope()))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let (message, record) = service::get_by_id(&state, &id).await?;
    Ok(Json(ApiResponse::ok(message, record)))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<ProductCreateDto>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let reply = service::create(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(reply_envelope(reply))))
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<ProductUpdateDto>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let reply = service::update(&state, &id, dto).await?;
    Ok(Json(reply_envelope(reply)))
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let reply = service::delete(&state, &id).await?;
    Ok(Json(reply_envelope(reply)))
}
