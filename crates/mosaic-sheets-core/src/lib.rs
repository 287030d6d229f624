//! # mosaic-sheets-core
//!
//! Spreadsheet document model for mosaic-sheets.
//!
//! This crate provides the in-memory document the grid renderer fills in:
//! - [`Workbook`], [`Worksheet`] - The document structures
//! - [`CellAddress`] and [`CellRange`] - Cell addressing
//! - [`Style`], [`FillStyle`], [`Color`] - Cell fills
//! - [`StylePool`] - Per-sheet style deduplication
//!
//! ## Example
//!
//! ```rust
//! use mosaic_sheets_core::{Color, Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//!
//! // Row/column indices are 0-based: (0, 0) is cell A1
//! sheet
//!     .set_cell_style_at(0, 0, &Style::new().fill_color(Color::rgb(255, 0, 0)))
//!     .unwrap();
//! sheet.set_column_width(0, 3.0).unwrap();
//! sheet.set_row_height(0, 20.0).unwrap();
//!
//! assert_eq!(sheet.cell_style("A1").unwrap().unwrap().fill.color().unwrap().to_hex(), "FF0000");
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellAddress, CellRange};
pub use error::{Error, Result};
pub use style::{Color, FillStyle, Style, StylePool};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
