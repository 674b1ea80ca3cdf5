use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::shared::error::ApiError;
use crate::shared::state::AppState;

/// Middleware for the admin resource routes: `Authorization: Bearer <secret>`
/// must match the configured API secret. An unset secret rejects everything.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let expected = state.config.api.secret.as_str();
    if expected.is_empty() {
        tracing::warn!("API secret is not configured, rejecting {}", req.uri().path());
        return Err(ApiError::Unauthorized);
    }

    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    if token.trim() != expected {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(req).await)
}
