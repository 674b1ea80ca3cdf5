//! Wire types shared between the Langgeng Jaya back end and its clients.
//!
//! Records mirror the spreadsheet rows the Apps Script service hands back, so
//! every numeric or boolean field is read leniently (see [`shared::lenient`]).

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
