use serde::{Deserialize, Serialize};

use crate::domain::common::{default_true, Timestamps};
use crate::shared::lenient;

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default = "default_true", deserialize_with = "lenient::loose_bool")]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryCreateDto {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_active: Option<bool>,
}
