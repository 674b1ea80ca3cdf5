pub mod service;
pub mod settlement;
