use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_branch::aggregate::{Branch, BranchCreateDto, BranchUpdateDto};
use contracts::domain::common::ListQuery;
use contracts::shared::response::ApiResponse;
use serde_json::Value;

use crate::domain::a001_branch::service;
use crate::shared::error::ApiResult;
use crate::shared::extract::ApiJson;
use crate::shared::records::reply_envelope;
use crate::shared::state::AppState;

/// GET /api/branches
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Branch>>>> {
    Ok(Json(service::list(&state, &query).await?.into_envelope()))
}

/// GET /api/branches/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Branch>>> {
    let (message, record) = service::get_by_id(&state, &id).await?;
    Ok(Json(ApiResponse::ok(message, record)))
}

/// POST /api/branches
pub async fn create(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<BranchCreateDto>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let reply = service::create(&state, dto).await?;
    Ok((StatusCode::CREATED, Json(reply_envelope(reply))))
}

/// PUT /api/branches/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<BranchUpdateDto>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let reply = service::update(&state, &id, dto).await?;
    Ok(Json(reply_envelope(reply)))
}

/// DELETE /api/branches/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let reply = service::delete(&state, &id).await?;
    Ok(Json(reply_envelope(reply)))
}
