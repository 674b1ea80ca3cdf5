use std::any::Any;

use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

use crate::shared::error::INTERNAL_MESSAGE;
use crate::shared::state::AppState;
use crate::{handlers, system};

/// All application routes
pub fn configure_routes(state: AppState) -> Router {
    // ========================================
    // ADMIN RESOURCES (Bearer API secret)
    // ========================================
    let admin = Router::new()
        .route(
            "/api/branches",
            get(handlers::a001_branch::list_all).post(handlers::a001_branch::create),
        )
        .route(
            "/api/branches/:id",
            get(handlers::a001_branch::get_by_id)
                .put(handlers::a001_branch::update)
                .delete(handlers::a001_branch::delete),
        )
        .route(
            "/api/categories",
            get(handlers::a002_category::list_all).post(handlers::a002_category::create),
        )
        .route(
            "/api/categories/:id",
            get(handlers::a002_category::get_by_id)
                .put(handlers::a002_category::update)
                .delete(handlers::a002_category::delete),
        )
        .route(
            "/api/suppliers",
            get(handlers::a003_supplier::list_all).post(handlers::a003_supplier::create),
        )
        .route(
            "/api/suppliers/:id",
            get(handlers::a003_supplier::get_by_id)
                .put(handlers::a003_supplier::update)
                .delete(handlers::a003_supplier::delete),
        )
        .route(
            "/api/employees",
            get(handlers::a004_employee::list_all).post(handlers::a004_employee::create),
        )
        .route(
            "/api/employees/:id",
            get(handlers::a004_employee::get_by_id)
                .put(handlers::a004_employee::update)
                .delete(handlers::a004_employee::delete),
        )
        .route(
            "/api/products",
            get(handlers::a005_product::list_all).post(handlers::a005_product::create),
        )
        .route(
            "/api/products/:id",
            get(handlers::a005_product::get_by_id)
                .put(handlers::a005_product::update)
                .delete(handlers::a005_product::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            system::auth::middleware::require_api_key,
        ));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // AUTH (public)
        // ========================================
        .route("/api/auth/login", post(system::handlers::auth::login))
        .route(
            "/api/auth/session",
            get(system::handlers::auth::current_session).delete(system::handlers::auth::logout),
        )
        // ========================================
        // CASHIER ROUTES (session cookie, checked by the CurrentUser extractor)
        // ========================================
        .route(
            "/api/profile",
            get(system::handlers::profile::get_profile).put(system::handlers::profile::update_profile),
        )
        .route(
            "/api/profile/password",
            post(system::handlers::profile::change_password),
        )
        .route(
            "/api/transactions",
            get(handlers::a006_transaction::list_all).post(handlers::a006_transaction::create),
        )
        .route(
            "/api/transactions/:id",
            get(handlers::a006_transaction::get_by_id)
                .put(handlers::a006_transaction::update)
                .delete(handlers::a006_transaction::delete),
        )
        .route(
            "/api/cashlog",
            get(handlers::a007_cash_log::list_all).post(handlers::a007_cash_log::create),
        )
        .route(
            "/api/cashlog/:id",
            get(handlers::a007_cash_log::get_by_id)
                .put(handlers::a007_cash_log::update)
                .delete(handlers::a007_cash_log::delete),
        )
        .route(
            "/api/laporan",
            get(handlers::a008_store_expense::list_all).post(handlers::a008_store_expense::create),
        )
        .route(
            "/api/laporan/:id",
            get(handlers::a008_store_expense::get_by_id)
                .put(handlers::a008_store_expense::update)
                .delete(handlers::a008_store_expense::delete),
        )
        // P901 cashier product views; `popular` is matched before `:id`
        .route(
            "/api/karyawan/products",
            get(handlers::p901_karyawan_catalog::search),
        )
        .route(
            "/api/karyawan/products/popular",
            get(handlers::p901_karyawan_catalog::popular),
        )
        .route(
            "/api/karyawan/products/:id",
            get(handlers::p901_karyawan_catalog::detail),
        )
        .merge(admin)
        .with_state(state)
}

/// A panicking handler still answers with the JSON error envelope
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"success": false, "message": INTERNAL_MESSAGE})),
    )
        .into_response()
}

/// Routes plus the cross-cutting layers: panic guard, access log, CORS
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    configure_routes(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
}
