pub mod lenient;
pub mod response;
