use serde::{Deserialize, Serialize};
use std::fmt;

use super::ApprovalStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashLogType {
    OpeningCash,
    ClosingCash,
}

impl CashLogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CashLogType::OpeningCash => "opening_cash",
            CashLogType::ClosingCash => "closing_cash",
        }
    }

    /// Opening cash is trusted as counted; closing cash waits for an admin
    pub fn initial_status(&self) -> ApprovalStatus {
        match self {
            CashLogType::OpeningCash => ApprovalStatus::Approved,
            CashLogType::ClosingCash => ApprovalStatus::Pending,
        }
    }
}

impl fmt::Display for CashLogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
