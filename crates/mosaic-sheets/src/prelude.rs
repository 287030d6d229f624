//! Prelude module - common imports for mosaic-sheets users
//!
//! ```rust
//! use mosaic_sheets::prelude::*;
//! ```

pub use crate::{
    // Pipeline
    convert,
    create_document,
    create_document_with,
    process,
    process_image,
    save,

    // Grid types
    ColorGrid,
    Rgb,

    // Document types
    Color,
    Style,
    Workbook,
    Worksheet,

    // Options and errors
    MosaicError,
    MosaicOptions,
    MosaicResult,
};
