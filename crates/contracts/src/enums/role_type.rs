use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee role as stored in the `roleType` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    SuperAdmin,
    Admin,
    #[default]
    Karyawan,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::SuperAdmin => "super_admin",
            RoleType::Admin => "admin",
            RoleType::Karyawan => "karyawan",
        }
    }

    /// Admin dashboard access (everything except cashiers)
    pub fn is_admin(&self) -> bool {
        !matches!(self, RoleType::Karyawan)
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
