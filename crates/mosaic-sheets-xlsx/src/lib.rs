//! # mosaic-sheets-xlsx
//!
//! XLSX (Office Open XML) writer for mosaic-sheets.

pub mod error;
pub mod writer;

mod styles;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
