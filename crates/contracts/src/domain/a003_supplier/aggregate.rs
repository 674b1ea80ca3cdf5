use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, Timestamps};
use crate::shared::lenient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub contact_person: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub address: String,
    #[serde(default = "default_true", deserialize_with = "lenient::loose_bool")]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierCreateDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub contact_person: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string_from_any")]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub contact_person: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_active: Option<bool>,
}
