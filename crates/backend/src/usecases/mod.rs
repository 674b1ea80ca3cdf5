pub mod u501_stock_reconciliation;
