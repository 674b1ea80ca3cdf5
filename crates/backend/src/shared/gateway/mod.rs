//! Access to the spreadsheet through the Apps Script web app.
//!
//! Every call is a single POST of `{action, sheet, ...fields}`; the reply is
//! `{success, message, data?, pagination?}`. [`interpret`] turns the raw reply
//! into either a [`GatewayReply`] or a classified [`GatewayError`].

pub mod apps_script;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub use apps_script::AppsScriptClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    List,
    Get,
    Create,
    Update,
    Delete,
    Login,
    ChangePassword,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Get => "get",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Login => "login",
            Action::ChangePassword => "changePassword",
        }
    }
}

/// One upstream call
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub action: Action,
    pub sheet: String,
    pub fields: Map<String, Value>,
}

impl GatewayRequest {
    pub fn new(action: Action, sheet: impl Into<String>) -> Self {
        Self {
            action,
            sheet: sheet.into(),
            fields: Map::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.field("id", id)
    }

    /// Request body. `action` and `sheet` always win over caller fields.
    pub fn envelope(&self) -> Value {
        let mut body = self.fields.clone();
        body.insert("action".into(), Value::from(self.action.as_str()));
        body.insert("sheet".into(), Value::from(self.sheet.clone()));
        Value::Object(body)
    }
}

/// Successful upstream reply
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayReply {
    pub message: String,
    pub data: Value,
    pub pagination: Option<Value>,
}

impl GatewayReply {
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_value(self.data.clone()).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GatewayError {
    #[error("upstream URL is not configured")]
    NotConfigured,

    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("upstream answered with non-JSON content ({0})")]
    NonJson(String),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    NotFound(String),
}

#[derive(Debug, Deserialize)]
struct UpstreamEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    pagination: Option<Value>,
}

/// Classifies a raw upstream reply.
///
/// Non-JSON content means the web app is misdeployed (Apps Script serves an
/// HTML error page) and is never parsed. A `success: false` whose message
/// mentions "not found" becomes [`GatewayError::NotFound`]; upstream has no
/// structured error codes.
pub fn interpret(content_type: Option<&str>, body: &[u8]) -> Result<GatewayReply, GatewayError> {
    let content_type = content_type.unwrap_or_default();
    if !content_type.to_ascii_lowercase().contains("application/json") {
        return Err(GatewayError::NonJson(if content_type.is_empty() {
            "no content type".into()
        } else {
            content_type.to_string()
        }));
    }

    let envelope: UpstreamEnvelope =
        serde_json::from_slice(body).map_err(|e| GatewayError::Decode(e.to_string()))?;

    if !envelope.success {
        let message = if envelope.message.is_empty() {
            "Request failed".to_string()
        } else {
            envelope.message
        };
        return Err(if message.to_ascii_lowercase().contains("not found") {
            GatewayError::NotFound(message)
        } else {
            GatewayError::Rejected(message)
        });
    }

    Ok(GatewayReply {
        message: envelope.message,
        data: envelope.data,
        pagination: envelope.pagination,
    })
}

/// Seam between route logic and the spreadsheet service
#[async_trait]
pub trait SheetGateway: Send + Sync {
    async fn call(&self, request: GatewayRequest) -> Result<GatewayReply, GatewayError>;
}
