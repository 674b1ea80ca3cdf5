pub mod a001_branch;
pub mod a002_category;
pub mod a003_supplier;
pub mod a004_employee;
pub mod a005_product;
pub mod a006_transaction;
pub mod a007_cash_log;
pub mod a008_store_expense;
pub mod common;
