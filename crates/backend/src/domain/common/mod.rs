pub mod approval;
pub mod clock;
