//! Error types for the image-to-spreadsheet pipeline

use mosaic_sheets_xlsx::XlsxError;
use thiserror::Error;

/// Result type alias using [`MosaicError`]
pub type MosaicResult<T> = std::result::Result<T, MosaicError>;

/// Errors raised by the block averager and the grid renderer
#[derive(Debug, Error)]
pub enum MosaicError {
    /// A parameter is outside its valid range (e.g. a block size of zero)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The source image is missing, unreadable, undecodable or has no pixels
    #[error("Image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The color grid has no rows or no columns
    #[error("Color grid is empty ({rows} rows x {cols} columns)")]
    EmptyGrid { rows: usize, cols: usize },

    /// Rows handed to [`ColorGrid::from_rows`](crate::ColorGrid::from_rows) differ in length
    #[error("Ragged color grid: row {row} has {actual} colors, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The destination file could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be serialized
    #[error("XLSX error: {0}")]
    Xlsx(XlsxError),

    /// The document model rejected the grid
    #[error("Document error: {0}")]
    Document(#[from] mosaic_sheets_core::Error),
}

impl From<XlsxError> for MosaicError {
    fn from(err: XlsxError) -> Self {
        match err {
            XlsxError::Io(e) => MosaicError::Io(e),
            other => MosaicError::Xlsx(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xlsx_io_error_maps_to_io() {
        let err: MosaicError =
            XlsxError::Io(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")).into();
        assert!(matches!(err, MosaicError::Io(_)));

        let err: MosaicError = XlsxError::InvalidFormat("no sheets".into()).into();
        assert!(matches!(err, MosaicError::Xlsx(_)));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            MosaicError::EmptyGrid { rows: 0, cols: 0 }.to_string(),
            "Color grid is empty (0 rows x 0 columns)"
        );
        assert_eq!(
            MosaicError::InvalidParameter("step must be positive".into()).to_string(),
            "Invalid parameter: step must be positive"
        );
    }
}
