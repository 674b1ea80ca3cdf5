use serde::{Deserialize, Serialize};

use crate::domain::common::Timestamps;
use crate::shared::lenient;

/// Store branch (cabang). Other sheets refer to it by `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub address: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchCreateDto {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
