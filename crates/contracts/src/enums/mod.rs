pub mod approval_status;
pub mod cash_log_type;
pub mod expense_category;
pub mod payment_status;
pub mod role_type;
pub mod transaction_status;

pub use approval_status::ApprovalStatus;
pub use cash_log_type::CashLogType;
pub use expense_category::ExpenseCategory;
pub use payment_status::PaymentStatus;
pub use role_type::RoleType;
pub use transaction_status::TransactionStatus;
