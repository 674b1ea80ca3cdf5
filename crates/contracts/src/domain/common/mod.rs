//! Pieces shared by all sheet-backed records

use serde::{Deserialize, Serialize};

use crate::shared::lenient;

/// Row timestamps maintained by the Apps Script side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub updated_at: String,
}

/// Query filters accepted by every list endpoint besides paging
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub branch_name: Option<String>,
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    pub supplier_name: Option<String>,
    pub status: Option<String>,
    pub payment_status: Option<String>,
    #[serde(rename = "type")]
    pub log_type: Option<String>,
    pub category: Option<String>,
    pub cashier_name: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "roleType")]
    pub role_type: Option<String>,
}

pub(crate) fn default_true() -> bool {
    true
}
