pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod gateway;
pub mod pagination;
pub mod records;
pub mod state;
