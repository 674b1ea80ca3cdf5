use serde::{Deserialize, Serialize};

use crate::domain::common::Timestamps;
use crate::enums::RoleType;
use crate::shared::lenient;

/// Employee / login account (users sheet).
///
/// Has no `password` field: rows read back from the sheet are stripped of it by
/// construction, only the create response echoes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_from_any")]
    pub email: String,
    #[serde(rename = "roleType", default)]
    pub role_type: RoleType,
    #[serde(rename = "branchName", default, deserialize_with = "lenient::string_from_any")]
    pub branch_name: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeCreateDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "roleType")]
    pub role_type: Option<RoleType>,
    #[serde(rename = "branchName")]
    pub branch_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "roleType", default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<RoleType>,
    #[serde(rename = "branchName", default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}
