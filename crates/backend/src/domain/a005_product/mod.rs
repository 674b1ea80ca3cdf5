pub mod barcode;
pub mod service;
