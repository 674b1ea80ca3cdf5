use serde::{Deserialize, Serialize};

use crate::domain::common::Timestamps;
use crate::enums::{ApprovalStatus, ExpenseCategory};
use crate::shared::lenient;

/// Store expense report (laporan pengeluaran)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreExpense {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub branch_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub cashier_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub approved_by: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub approved_at: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub receipt_url: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub status: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreExpenseCreateDto {
    pub date: Option<String>,
    pub category: Option<ExpenseCategory>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub branch_name: Option<String>,
    pub cashier_name: Option<String>,
    pub receipt_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreExpenseUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
}
