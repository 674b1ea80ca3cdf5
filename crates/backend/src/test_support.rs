//! Fixtures for tests that drive services or the whole router

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use contracts::enums::RoleType;
use contracts::system::auth::SessionUser;
use serde_json::Value;
use tower::ServiceExt;

use crate::shared::config::Config;
use crate::shared::gateway::memory::MemoryGateway;
use crate::shared::state::AppState;
use crate::system::auth::session;

pub const API_SECRET: &str = "test-api-secret";

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.api.secret = API_SECRET.into();
    config.session.secret = "test-session-secret".into();
    config
}

pub fn state_with(gateway: Arc<MemoryGateway>) -> AppState {
    AppState::new(test_config(), gateway)
}

pub fn cashier() -> SessionUser {
    SessionUser {
        id: "7".into(),
        name: "Sari".into(),
        email: "sari@langgeng.id".into(),
        role_type: RoleType::Karyawan,
        branch_name: "Cabang Pusat".into(),
    }
}

/// `Cookie` header value carrying a valid session for `user`
pub fn session_header(user: &SessionUser) -> String {
    let token = session::issue_token(user, &test_config().session).unwrap();
    format!("{}={}", session::SESSION_COOKIE, token)
}

pub enum Auth<'a> {
    None,
    ApiKey,
    Session(&'a SessionUser),
}

pub struct TestResponse {
    pub status: StatusCode,
    pub set_cookies: Vec<String>,
    pub body: Value,
}

pub async fn send(app: Router, method: Method, uri: &str, auth: Auth<'_>, body: Option<Value>) -> TestResponse {
    let mut request = Request::builder().method(method).uri(uri);
    match auth {
        Auth::None => {}
        Auth::ApiKey => {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", API_SECRET));
        }
        Auth::Session(user) => {
            request = request.header(header::COOKIE, session_header(user));
        }
    }
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let set_cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    TestResponse {
        status,
        set_cookies,
        body,
    }
}
