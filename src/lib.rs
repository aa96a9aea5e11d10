#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod error;
pub mod recurrence;
pub mod workbook;
