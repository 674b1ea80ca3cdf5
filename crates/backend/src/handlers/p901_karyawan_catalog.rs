use axum::extract::{Path, Query, State};
use axum::Json;
use contracts::domain::common::ListQuery;
use contracts::projections::p901_karyawan_catalog::dto::{PublicProduct, PublicProductDetail};
use contracts::shared::response::{ApiResponse, PageInfo};

use crate::projections::p901_karyawan_catalog::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

fn paged(
    message: &str,
    (rows, info): (Vec<PublicProduct>, PageInfo),
) -> ApiResult<Json<ApiResponse<Vec<PublicProduct>>>> {
    let pagination = serde_json::to_value(info)?;
    Ok(Json(ApiResponse::ok(message, rows).with_pagination(Some(pagination))))
}

/// GET /api/karyawan/products
pub async fn search(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<PublicProduct>>>> {
    paged("Products retrieved", service::search(&state, &query).await?)
}

/// GET /api/karyawan/products/popular
pub async fn popular(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<PublicProduct>>>> {
    paged("Popular products retrieved", service::popular(&state, &query).await?)
}

/// GET /api/karyawan/products/:id
pub async fn detail(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<PublicProductDetail>>> {
    let product = service::detail(&state, &id).await?;
    Ok(Json(ApiResponse::ok("Product retrieved", product)))
}
