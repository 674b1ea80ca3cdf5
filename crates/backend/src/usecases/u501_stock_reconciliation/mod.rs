pub mod executor;

pub use executor::{execute, next_counters, ReconciliationReport};
