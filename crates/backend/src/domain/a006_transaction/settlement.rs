//! Payment and lifecycle status of a sale at checkout

use contracts::enums::{PaymentStatus, TransactionStatus};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    pub payment_status: PaymentStatus,
    pub status: TransactionStatus,
    pub due_amount: f64,
}

impl Settlement {
    /// Cash sales always complete; a credit sale completes only once paid in full.
    pub fn compute(total: f64, paid_amount: f64, is_credit: bool) -> Self {
        let payment_status = PaymentStatus::derive(paid_amount, total);
        let status = if !is_credit || paid_amount >= total {
            TransactionStatus::Completed
        } else {
            TransactionStatus::Pending
        };
        Self {
            payment_status,
            status,
            due_amount: (total - paid_amount).max(0.0),
        }
    }

    /// Whether the goods left the shelf
    pub fn moves_stock(&self) -> bool {
        moves_stock(self.status, self.payment_status)
    }
}

pub fn moves_stock(status: TransactionStatus, payment_status: PaymentStatus) -> bool {
    match status {
        TransactionStatus::Completed => true,
        TransactionStatus::Pending => payment_status == PaymentStatus::Partial,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cash_sale_always_completes() {
        for paid in [0.0, 40.0, 100.0, 250.0] {
            let settlement = Settlement::compute(100.0, paid, false);
            assert_eq!(settlement.status, TransactionStatus::Completed, "paid {}", paid);
        }
    }

    #[test]
    fn unpaid_cash_sale() {
        let settlement = Settlement::compute(100.0, 0.0, false);
        assert_eq!(settlement.status, TransactionStatus::Completed);
        assert_eq!(settlement.payment_status, PaymentStatus::Unpaid);
        assert_eq!(settlement.due_amount, 100.0);
        assert!(settlement.moves_stock());
    }

    #[test]
    fn partial_credit_sale_stays_pending() {
        let settlement = Settlement::compute(100.0, 50.0, true);
        assert_eq!(settlement.status, TransactionStatus::Pending);
        assert_eq!(settlement.payment_status, PaymentStatus::Partial);
        assert_eq!(settlement.due_amount, 50.0);
        assert!(settlement.moves_stock());
    }

    #[test]
    fn unpaid_credit_sale_keeps_stock() {
        let settlement = Settlement::compute(100.0, 0.0, true);
        assert_eq!(settlement.status, TransactionStatus::Pending);
        assert_eq!(settlement.payment_status, PaymentStatus::Unpaid);
        assert!(!settlement.moves_stock());
    }

    #[test]
    fn fully_paid_credit_sale_completes() {
        let settlement = Settlement::compute(100.0, 120.0, true);
        assert_eq!(settlement.status, TransactionStatus::Completed);
        assert_eq!(settlement.payment_status, PaymentStatus::Paid);
        assert_eq!(settlement.due_amount, 0.0);
    }

    #[test]
    fn zero_total_is_paid() {
        let settlement = Settlement::compute(0.0, 0.0, true);
        assert_eq!(settlement.payment_status, PaymentStatus::Paid);
        assert_eq!(settlement.status, TransactionStatus::Completed);
    }

    #[test]
    fn cancelled_and_returned_never_move_stock() {
        assert!(!moves_stock(TransactionStatus::Cancelled, PaymentStatus::Paid));
        assert!(!moves_stock(TransactionStatus::Return, PaymentStatus::Partial));
    }
}
