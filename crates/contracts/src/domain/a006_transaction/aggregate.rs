use serde::{Deserialize, Serialize};

use crate::domain::common::Timestamps;
use crate::enums::{PaymentStatus, TransactionStatus};
use crate::shared::lenient;

// ============================================================================
// Records
// ============================================================================

/// Sales transaction. `items` is stored inline, as an array or a JSON string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub transaction_number: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub discount: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub paid_amount: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub due_amount: f64,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_credit: Option<bool>,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub payment_method: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub payment_status: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::array_or_json_string")]
    pub items: Vec<TransactionItem>,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub branch_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub created_by: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Normalized line item as persisted with its transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub product_id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::loose_f64")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub unit: String,
}

// ============================================================================
// Payloads
// ============================================================================

/// Line item as the cashier screen sends it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionItemInput {
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub subtotal: Option<f64>,
    pub unit: Option<String>,
}

impl TransactionItemInput {
    /// Fills defaults; a missing subtotal is `quantity * price`
    pub fn normalize(&self) -> TransactionItem {
        let quantity = self.quantity.unwrap_or(0.0);
        let price = self.price.unwrap_or(0.0);
        TransactionItem {
            product_id: self.product_id.clone().unwrap_or_default(),
            product_name: self.product_name.clone().unwrap_or_default(),
            image_url: self.image_url.clone().unwrap_or_default(),
            quantity,
            price,
            subtotal: self.subtotal.unwrap_or(quantity * price),
            unit: self.unit.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionCreateDto {
    pub transaction_number: Option<String>,
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub discount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub subtotal: Option<f64>,
    pub branch_name: Option<String>,
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub paid_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_credit: Option<bool>,
    pub status: Option<TransactionStatus>,
    #[serde(default, deserialize_with = "lenient::array_or_json_string")]
    pub items: Vec<TransactionItemInput>,
}

/// Partial transaction update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionUpdateDto {
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub discount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub subtotal: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub paid_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub due_amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_credit: Option<bool>,
    pub payment_method: Option<String>,
    pub payment_status: Option<PaymentStatus>,
    pub status: Option<TransactionStatus>,
    pub branch_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_array_or_json_string")]
    pub items: Option<Vec<TransactionItemInput>>,
}
