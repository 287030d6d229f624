//! # mosaic-sheets
//!
//! Turn a raster image into a spreadsheet whose cells, painted with solid
//! fills, reproduce the picture at reduced resolution.
//!
//! The conversion runs in two steps joined by a [`ColorGrid`]:
//!
//! - the block averager ([`process`], [`process_image`]) cuts the image into
//!   `step`×`step` blocks and averages each one into a single color
//! - the grid renderer ([`create_document`], [`save`]) paints grid position
//!   `(i, j)` onto spreadsheet cell `(i + 1, j + 1)`
//!
//! ## Example
//!
//! ```rust
//! use mosaic_sheets::prelude::*;
//!
//! let image = image::RgbImage::from_pixel(10, 4, image::Rgb([255, 0, 0]));
//! let grid = process_image(&image, 5).unwrap();
//! assert_eq!((grid.rows(), grid.cols()), (1, 2));
//!
//! let workbook = create_document(&grid).unwrap();
//! let sheet = workbook.worksheet(0).unwrap();
//! let fill = sheet.cell_style("B1").unwrap().unwrap().fill.color().unwrap();
//! assert_eq!(fill.to_hex(), "FF0000");
//!
//! // save(&workbook, "mosaic.xlsx").unwrap();
//! ```

pub mod averager;
pub mod error;
pub mod grid;
pub mod options;
pub mod prelude;
pub mod renderer;

use std::path::Path;

pub use averager::{average_block, process, process_image, Block};
pub use error::{MosaicError, MosaicResult};
pub use grid::{ColorGrid, Rgb};
pub use options::{MosaicOptions, CELL_WIDTH, DEFAULT_STEP, ROW_HEIGHT};
pub use renderer::{create_document, create_document_with, save};

// Re-export the document model and writer
pub use mosaic_sheets_core::{CellAddress, Color, FillStyle, Style, Workbook, Worksheet};
pub use mosaic_sheets_xlsx::{XlsxError, XlsxWriter};

/// Convert the image at `input` into an XLSX mosaic at `output`
///
/// Returns the color grid that was rendered.
pub fn convert<P, Q>(input: P, output: Q, options: &MosaicOptions) -> MosaicResult<ColorGrid>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let grid = process(input, options.step)?;
    let document = create_document_with(&grid, options)?;
    save(&document, output.as_ref())?;

    log::info!(
        "wrote {} rows x {} columns to {}",
        grid.rows(),
        grid.cols(),
        output.as_ref().display()
    );
    Ok(grid)
}
