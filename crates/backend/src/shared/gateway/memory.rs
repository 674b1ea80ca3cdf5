//! In-memory stand-in for the Apps Script service, used by tests.
//!
//! Replies are rendered to bytes and run through [`interpret`] so the same
//! classification rules apply as against the real upstream.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::{interpret, Action, GatewayError, GatewayReply, GatewayRequest, SheetGateway};

const PAGING_KEYS: [&str; 3] = ["page", "limit", "offset"];

#[derive(Default)]
pub struct MemoryGateway {
    sheets: Mutex<HashMap<String, Vec<Map<String, Value>>>>,
    calls: Mutex<Vec<GatewayRequest>>,
    failures: Mutex<HashMap<(Action, String), String>>,
    html: Mutex<bool>,
    next_id: AtomicU64,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a row; `value` must be a JSON object
    pub fn insert(&self, sheet: &str, value: Value) {
        if let Value::Object(row) = value {
            self.sheets
                .lock()
                .unwrap()
                .entry(sheet.to_string())
                .or_default()
                .push(row);
        }
    }

    pub fn rows(&self, sheet: &str) -> Vec<Value> {
        self.sheets
            .lock()
            .unwrap()
            .get(sheet)
            .map(|rows| rows.iter().cloned().map(Value::Object).collect())
            .unwrap_or_default()
    }

    pub fn row(&self, sheet: &str, id: &str) -> Option<Value> {
        self.rows(sheet)
            .into_iter()
            .find(|row| id_of(row.as_object().unwrap()) == id)
    }

    pub fn calls(&self) -> Vec<GatewayRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, action: Action, sheet: &str) -> Vec<GatewayRequest> {
        self.calls()
            .into_iter()
            .filter(|c| c.action == action && c.sheet == sheet)
            .collect()
    }

    /// Every `action` on `sheet` answers `success: false` with `message`
    pub fn fail(&self, action: Action, sheet: &str, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert((action, sheet.to_string()), message.to_string());
    }

    /// Answer everything with an HTML page, like a broken deployment
    pub fn serve_html(&self) {
        *self.html.lock().unwrap() = true;
    }

    fn respond(&self, request: &GatewayRequest) -> Value {
        if let Some(message) = self
            .failures
            .lock()
            .unwrap()
            .get(&(request.action, request.sheet.clone()))
        {
            return json!({"success": false, "message": message});
        }

        let mut sheets = self.sheets.lock().unwrap();
        let rows = sheets.entry(request.sheet.clone()).or_default();
        let id = request.fields.get("id").map(text).unwrap_or_default();

        match request.action {
            Action::List => list(rows, &request.fields),
            Action::Get => match rows.iter().find(|r| id_of(r) == id) {
                Some(row) => json!({"success": true, "message": "OK", "data": row}),
                None => not_found(&id),
            },
            Action::Create => {
                let mut row = request.fields.clone();
                if !row.contains_key("id") {
                    let next = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                    row.insert("id".into(), Value::from(next.to_string()));
                }
                row.insert("created_at".into(), Value::from("2024-05-01T08:00:00.000Z"));
                rows.push(row.clone());
                json!({"success": true, "message": "Created", "data": row})
            }
            Action::Update => match rows.iter_mut().find(|r| id_of(r) == id) {
                Some(row) => {
                    for (key, value) in &request.fields {
                        row.insert(key.clone(), value.clone());
                    }
                    json!({"success": true, "message": "Updated", "data": row})
                }
                None => not_found(&id),
            },
            Action::Delete => {
                let before = rows.len();
                rows.retain(|r| id_of(r) != id);
                if rows.len() == before {
                    not_found(&id)
                } else {
                    json!({"success": true, "message": "Deleted", "data": {"id": id}})
                }
            }
            Action::Login => {
                let email = request.fields.get("email").map(text).unwrap_or_default();
                let password = request.fields.get("password").map(text).unwrap_or_default();
                match rows.iter().find(|r| {
                    r.get("email").map(text).as_deref() == Some(email.as_str())
                        && r.get("password").map(text).as_deref() == Some(password.as_str())
                }) {
                    Some(row) => json!({"success": true, "message": "Login successful", "data": row}),
                    None => json!({"success": false, "message": "Invalid email or password"}),
                }
            }
            Action::ChangePassword => {
                let current = request
                    .fields
                    .get("currentPassword")
                    .map(text)
                    .unwrap_or_default();
                match rows.iter_mut().find(|r| id_of(r) == id) {
                    Some(row) if row.get("password").map(text).as_deref() == Some(current.as_str()) => {
                        if let Some(new) = request.fields.get("newPassword") {
                            row.insert("password".into(), new.clone());
                        }
                        json!({"success": true, "message": "Password changed", "data": null})
                    }
                    Some(_) => json!({"success": false, "message": "Current password is incorrect"}),
                    None => not_found(&id),
                }
            }
        }
    }
}

#[async_trait]
impl SheetGateway for MemoryGateway {
    async fn call(&self, request: GatewayRequest) -> Result<GatewayReply, GatewayError> {
        self.calls.lock().unwrap().push(request.clone());
        if *self.html.lock().unwrap() {
            return interpret(Some("text/html; charset=utf-8"), b"<!DOCTYPE html><html></html>");
        }
        let body = self.respond(&request);
        let bytes = serde_json::to_vec(&body).unwrap();
        interpret(Some("application/json; charset=utf-8"), &bytes)
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn id_of(row: &Map<String, Value>) -> String {
    row.get("id").map(text).unwrap_or_default()
}

fn not_found(id: &str) -> Value {
    json!({"success": false, "message": format!("Record with id {} not found", id)})
}

/// Equality filters on any non-paging field, `search` over `name`
fn list(rows: &[Map<String, Value>], fields: &Map<String, Value>) -> Value {
    let matching: Vec<&Map<String, Value>> = rows
        .iter()
        .filter(|row| {
            fields.iter().all(|(key, wanted)| {
                if PAGING_KEYS.contains(&key.as_str()) {
                    return true;
                }
                if key == "search" {
                    let needle = text(wanted).to_lowercase();
                    return row
                        .get("name")
                        .map(|n| text(n).to_lowercase().contains(&needle))
                        .unwrap_or(false);
                }
                row.get(key).map(text) == Some(text(wanted))
            })
        })
        .collect();

    let total = matching.len();
    let page = fields.get("page").and_then(Value::as_u64).unwrap_or(1).max(1) as usize;
    match fields.get("limit").and_then(Value::as_u64) {
        Some(limit) => {
            let limit = limit as usize;
            let data: Vec<_> = matching
                .into_iter()
                .skip((page - 1).saturating_mul(limit))
                .take(limit)
                .cloned()
                .collect();
            json!({
                "success": true,
                "message": "OK",
                "data": data,
                "pagination": {"page": page, "limit": limit, "total": total}
            })
        }
        None => {
            let data: Vec<_> = matching.into_iter().cloned().collect();
            json!({"success": true, "message": "OK", "data": data})
        }
    }
}
