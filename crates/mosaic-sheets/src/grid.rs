//! Color grid - the hand-off between the averager and the renderer

use std::fmt;

use mosaic_sheets_core::Color;

use crate::error::{MosaicError, MosaicResult};

/// An opaque RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Six uppercase hex digits, `RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parse `RRGGBB` (case-insensitive, optional leading `#`)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::rgb(c.r, c.g, c.b)
    }
}

/// A rectangular grid of colors, stored row-major
///
/// Every row has the same length. Produced by the block averager and read,
/// never mutated, by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Rgb>,
}

impl ColorGrid {
    /// Build a grid from nested rows, rejecting rows of unequal length
    pub fn from_rows(rows: Vec<Vec<Rgb>>) -> MosaicResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MosaicError::RaggedGrid {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a grid from row-major cells; `cells.len()` must equal `rows * cols`
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Rgb>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of colors in each row
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Color at (row, col), 0-based
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// One row of colors
    pub fn row(&self, row: usize) -> Option<&[Rgb]> {
        if row < self.rows {
            self.cells.get(row * self.cols..(row + 1) * self.cols)
        } else {
            None
        }
    }

    /// Iterate rows top-to-bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Rgb]> + '_ {
        (0..self.rows).map(move |i| &self.cells[i * self.cols..(i + 1) * self.cols])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(255, 0, 0).to_hex(), "FF0000");
        assert_eq!(Rgb::new(10, 20, 30).to_hex(), "0A141E");
        assert_eq!(Rgb::from_hex("0a141e"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(Rgb::from_hex("#FFFFFF"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("FFF"), None);
        assert_eq!(Rgb::from_hex("XX0000"), None);
    }

    #[test]
    fn test_from_rows() {
        let grid = ColorGrid::from_rows(vec![
            vec![Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)],
            vec![Rgb::new(3, 3, 3), Rgb::new(4, 4, 4)],
        ])
        .unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(1, 0), Some(Rgb::new(3, 3, 3)));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.row(0).unwrap(), &[Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = ColorGrid::from_rows(vec![vec![Rgb::default(); 3], vec![Rgb::default(); 2]])
            .unwrap_err();
        assert!(matches!(
            err,
            MosaicError::RaggedGrid {
                row: 1,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_empty_shapes() {
        let no_rows = ColorGrid::from_rows(Vec::new()).unwrap();
        assert!(no_rows.is_empty());
        assert_eq!(no_rows.iter_rows().count(), 0);

        let no_cols = ColorGrid::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert!(no_cols.is_empty());
        assert_eq!(no_cols.rows(), 2);
        assert_eq!(no_cols.cols(), 0);
        assert!(no_cols.iter_rows().all(|r| r.is_empty()));
    }
}
