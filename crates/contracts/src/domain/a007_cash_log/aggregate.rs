use serde::{Deserialize, Serialize};

use crate::domain::common::Timestamps;
use crate::enums::{ApprovalStatus, CashLogType};
use crate::shared::lenient;

/// Opening / closing cash count for a cashier shift
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashLog {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub cashier_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub branch_name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::string_from_any")]
    pub log_type: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub approved_by: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub approved_at: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CashLogCreateDto {
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    pub cashier_name: Option<String>,
    pub branch_name: Option<String>,
    #[serde(rename = "type")]
    pub log_type: Option<CashLogType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashLogUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub log_type: Option<CashLogType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
}
