//! CRUD plumbing shared by every sheet-backed resource

use contracts::shared::response::ApiResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::gateway::{Action, GatewayReply, GatewayRequest, SheetGateway};
use crate::shared::pagination::PageRequest;

/// Typed list page as returned by upstream
#[derive(Debug, Clone)]
pub struct Listed<T> {
    pub message: String,
    pub items: Vec<T>,
    pub pagination: Option<Value>,
}

impl<T> Listed<T> {
    pub fn into_envelope(self) -> ApiResponse<Vec<T>> {
        ApiResponse::ok(self.message, self.items).with_pagination(self.pagination)
    }
}

pub fn reply_envelope(reply: GatewayReply) -> ApiResponse<Value> {
    ApiResponse::ok(reply.message, reply.data).with_pagination(reply.pagination)
}

pub fn require_id(id: &str) -> ApiResult<&str> {
    let id = id.trim();
    if id.is_empty() {
        Err(ApiError::bad_request("ID is required"))
    } else {
        Ok(id)
    }
}

/// Non-empty trimmed text, or `None`
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Object payload from a `json!` literal
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Serializes a DTO into upstream fields; `None` members are skipped by the
/// DTO's serde attributes, which is what makes updates partial
pub fn to_fields<T: Serialize>(dto: &T) -> ApiResult<Map<String, Value>> {
    match serde_json::to_value(dto)? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::Internal(format!("expected an object, got {}", other))),
    }
}

/// Upstream list fields.
///
/// Without filters the page window is passed as `page`/`limit`/`offset`; with
/// filters the filters go up with `page`/`limit` and upstream filters first.
pub fn list_fields(page: PageRequest, filters: &[(&str, Option<&str>)]) -> Map<String, Value> {
    let mut fields = Map::new();
    for (key, value) in filters {
        if let Some(value) = non_blank(*value) {
            fields.insert((*key).to_string(), Value::from(value));
        }
    }
    let filtered = !fields.is_empty();
    fields.insert("page".into(), Value::from(page.page));
    fields.insert("limit".into(), Value::from(page.limit));
    if !filtered {
        fields.insert("offset".into(), Value::from(page.offset()));
    }
    fields
}

fn decode_list<T: DeserializeOwned>(reply: &GatewayReply) -> ApiResult<Vec<T>> {
    if reply.data.is_null() {
        return Ok(Vec::new());
    }
    Ok(reply.data_as()?)
}

pub async fn list<T: DeserializeOwned>(
    gateway: &dyn SheetGateway,
    sheet: &str,
    fields: Map<String, Value>,
) -> ApiResult<Listed<T>> {
    let reply = gateway
        .call(GatewayRequest::new(Action::List, sheet).fields(fields))
        .await?;
    let items = decode_list(&reply)?;
    Ok(Listed {
        message: reply.message,
        items,
        pagination: reply.pagination,
    })
}

/// Whole sheet, no paging; for views that filter and page locally
pub async fn list_all<T: DeserializeOwned>(gateway: &dyn SheetGateway, sheet: &str) -> ApiResult<Vec<T>> {
    let reply = gateway.call(GatewayRequest::new(Action::List, sheet)).await?;
    decode_list(&reply)
}

pub async fn get<T: DeserializeOwned>(
    gateway: &dyn SheetGateway,
    sheet: &str,
    id: &str,
) -> ApiResult<(String, T)> {
    let id = require_id(id)?;
    let reply = gateway.call(GatewayRequest::new(Action::Get, sheet).id(id)).await?;
    if reply.data.is_null() {
        return Err(ApiError::NotFound(format!("Record {} not found", id)));
    }
    let record = reply.data_as()?;
    Ok((reply.message, record))
}

pub async fn create(
    gateway: &dyn SheetGateway,
    sheet: &str,
    fields: Map<String, Value>,
) -> ApiResult<GatewayReply> {
    Ok(gateway
        .call(GatewayRequest::new(Action::Create, sheet).fields(fields))
        .await?)
}

pub async fn update(
    gateway: &dyn SheetGateway,
    sheet: &str,
    id: &str,
    fields: Map<String, Value>,
) -> ApiResult<GatewayReply> {
    let id = require_id(id)?;
    if fields.is_empty() {
        return Err(ApiError::bad_request("No fields to update"));
    }
    Ok(gateway
        .call(GatewayRequest::new(Action::Update, sheet).fields(fields).id(id))
        .await?)
}

pub async fn delete(gateway: &dyn SheetGateway, sheet: &str, id: &str) -> ApiResult<GatewayReply> {
    let id = require_id(id)?;
    Ok(gateway
        .call(GatewayRequest::new(Action::Delete, sheet).id(id))
        .await?)
}

/// Drops the password column from a reply payload (object or array of objects)
pub fn strip_password(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("password");
        }
        Value::Array(rows) => rows.iter_mut().for_each(strip_password),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unfiltered_list_sends_offset() {
        let fields = list_fields(PageRequest::from_params(Some("3"), Some("20")), &[("search", None)]);
        assert_eq!(fields["page"], 3);
        assert_eq!(fields["limit"], 20);
        assert_eq!(fields["offset"], 40);
        assert!(!fields.contains_key("search"));
    }

    #[test]
    fn filtered_list_has_no_offset() {
        let fields = list_fields(
            PageRequest::default(),
            &[("branch_name", Some(" Pusat ")), ("search", Some(""))],
        );
        assert_eq!(fields["branch_name"], "Pusat");
        assert!(!fields.contains_key("offset"));
        assert!(!fields.contains_key("search"));
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(matches!(require_id("  "), Err(ApiError::BadRequest(_))));
        assert_eq!(require_id(" 7 ").unwrap(), "7");
    }

    #[test]
    fn password_is_stripped_everywhere() {
        let mut value = json!([{"id": 1, "password": "x"}, {"id": 2}]);
        strip_password(&mut value);
        assert_eq!(value, json!([{"id": 1}, {"id": 2}]));
    }
}
