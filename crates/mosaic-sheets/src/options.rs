//! Conversion options

/// Default block edge length in source pixels
pub const DEFAULT_STEP: u32 = 5;

/// Width given to every spreadsheet column, in character units
pub const CELL_WIDTH: f64 = 3.0;

/// Height given to every spreadsheet row, in points
pub const ROW_HEIGHT: f64 = 20.0;

/// Options for converting an image into a spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicOptions {
    /// Block edge length in source pixels (default: 5)
    pub step: u32,
    /// Column width in character units (default: 3)
    pub cell_width: f64,
    /// Row height in points (default: 20)
    pub row_height: f64,
}

impl MosaicOptions {
    /// Default options with a different block size
    pub fn with_step(step: u32) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }
}

impl Default for MosaicOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            cell_width: CELL_WIDTH,
            row_height: ROW_HEIGHT,
        }
    }
}
