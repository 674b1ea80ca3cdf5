use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, Timestamps};
use crate::shared::lenient;

// ============================================================================
// Record
// ============================================================================

/// Product row. `stock` and `sold` are also moved by transaction creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub price: f64,
    /// Cost price
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub modal: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub stock: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub sold: f64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub size: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub category_id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub category_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub barcode: String,
    #[serde(default = "default_true", deserialize_with = "lenient::loose_bool")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub min_stock: f64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub supplier_id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub supplier_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub expiration_date: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub created_by: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub updated_by: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub branch_id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub branch_name: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

// ============================================================================
// Payloads
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductCreateDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub modal: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub sold: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub size: Option<String>,
    pub unit: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub category_id: Option<String>,
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub min_stock: Option<f64>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
    pub expiration_date: Option<String>,
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub branch_id: Option<String>,
    pub branch_name: Option<String>,
}

/// Partial product update; `None` fields are left untouched upstream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub modal: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub sold: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any", skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_f64", skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any", skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

impl ProductUpdateDto {
    /// The two-field update issued after a sale
    pub fn stock_movement(stock: f64, sold: f64) -> Self {
        Self {
            stock: Some(stock),
            sold: Some(sold),
            ..Default::default()
        }
    }
}
