use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Partial,
}

impl PaymentStatus {
    /// Derives the status from what has been paid against the total.
    ///
    /// The `paid >= total` check runs first, so a zero total with nothing
    /// paid counts as paid.
    pub fn derive(paid_amount: f64, total: f64) -> Self {
        if paid_amount >= total {
            PaymentStatus::Paid
        } else if paid_amount <= 0.0 {
            PaymentStatus::Unpaid
        } else {
            PaymentStatus::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_rules() {
        assert_eq!(PaymentStatus::derive(0.0, 100.0), PaymentStatus::Unpaid);
        assert_eq!(PaymentStatus::derive(-5.0, 100.0), PaymentStatus::Unpaid);
        assert_eq!(PaymentStatus::derive(50.0, 100.0), PaymentStatus::Partial);
        assert_eq!(PaymentStatus::derive(100.0, 100.0), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::derive(150.0, 100.0), PaymentStatus::Paid);
    }

    #[test]
    fn zero_total_zero_paid_is_paid() {
        assert_eq!(PaymentStatus::derive(0.0, 0.0), PaymentStatus::Paid);
    }
}
