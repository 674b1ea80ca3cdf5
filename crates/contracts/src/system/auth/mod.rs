use serde::{Deserialize, Serialize};

use crate::domain::a004_employee::aggregate::Employee;
use crate::enums::RoleType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Who is logged in; used to stamp `created_by`, `cashier_name`, `approved_by`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "roleType")]
    pub role_type: RoleType,
    #[serde(rename = "branchName")]
    pub branch_name: String,
}

impl From<Employee> for SessionUser {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            role_type: employee.role_type,
            branch_name: employee.branch_name,
        }
    }
}

/// Claims of the signed session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: SessionUser,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: Option<String>,
    #[serde(rename = "newPassword")]
    pub new_password: Option<String>,
}

/// Self-service profile edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "branchName", default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}
