//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellRange};
use crate::error::{Error, Result};
use crate::style::{Style, StylePool};
use crate::{MAX_COLS, MAX_ROWS};

/// Default row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Default column width in characters
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Largest row height a spreadsheet application accepts, in points
pub const MAX_ROW_HEIGHT: f64 = 409.0;

/// Largest column width a spreadsheet application accepts, in characters
pub const MAX_COLUMN_WIDTH: f64 = 255.0;

/// A worksheet (single sheet in a workbook)
///
/// Cells carry only a style index; a mosaic has no cell values.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// (row, col) → style index, row-major by construction of the key
    cells: BTreeMap<(u32, u16), u32>,
    /// Styles referenced by `cells`
    style_pool: StylePool,
    /// Custom row heights
    row_heights: BTreeMap<u32, f64>,
    /// Custom column widths
    column_widths: BTreeMap<u16, f64>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            style_pool: StylePool::new(),
            row_heights: BTreeMap::new(),
            column_widths: BTreeMap::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Styles ===

    /// Get a cell's style index by row/column.
    ///
    /// Returns 0 if the cell does not exist or has the default style.
    pub fn cell_style_index_at(&self, row: u32, col: u16) -> u32 {
        self.cells.get(&(row, col)).copied().unwrap_or(0)
    }

    /// Get a style by its index in this worksheet's style pool.
    pub fn style_by_index(&self, style_index: u32) -> Option<&Style> {
        self.style_pool.get(style_index)
    }

    /// Get the non-default style applied to a cell, if any.
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        match self.cell_style_index_at(row, col) {
            0 => None,
            idx => self.style_by_index(idx),
        }
    }

    /// Get the non-default style applied to a cell by address, if any.
    pub fn cell_style(&self, address: &str) -> Result<Option<&Style>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_style_at(addr.row, addr.col))
    }

    /// Set a cell style by row and column indices
    ///
    /// Setting the default style removes the cell.
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let style_index = self.style_pool.get_or_insert(*style);
        if style_index == 0 {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), style_index);
        }
        Ok(())
    }

    /// Get the used range (bounds of all styled cells)
    pub fn used_range(&self) -> Option<CellRange> {
        let (&(first_row, _), _) = self.cells.first_key_value()?;
        let (&(last_row, _), _) = self.cells.last_key_value()?;
        let min_col = self.cells.keys().map(|&(_, c)| c).min()?;
        let max_col = self.cells.keys().map(|&(_, c)| c).max()?;
        Some(CellRange::from_indices(first_row, min_col, last_row, max_col))
    }

    // === Row/Column Operations ===

    /// Get row height in points
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(DEFAULT_ROW_HEIGHT)
    }

    /// Set row height in points
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if !(height.is_finite() && (0.0..=MAX_ROW_HEIGHT).contains(&height)) {
            return Err(Error::InvalidDimension(format!(
                "row height {} outside 0..={}",
                height, MAX_ROW_HEIGHT
            )));
        }

        if (height - DEFAULT_ROW_HEIGHT).abs() < 0.001 {
            self.row_heights.remove(&row);
        } else {
            self.row_heights.insert(row, height);
        }
        Ok(())
    }

    /// Get column width in characters
    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Set column width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }
        if !(width.is_finite() && (0.0..=MAX_COLUMN_WIDTH).contains(&width)) {
            return Err(Error::InvalidDimension(format!(
                "column width {} outside 0..={}",
                width, MAX_COLUMN_WIDTH
            )));
        }

        if (width - DEFAULT_COLUMN_WIDTH).abs() < 0.001 {
            self.column_widths.remove(&col);
        } else {
            self.column_widths.insert(col, width);
        }
        Ok(())
    }

    /// Get all custom row heights (row index → height in points).
    pub fn custom_row_heights(&self) -> &BTreeMap<u32, f64> {
        &self.row_heights
    }

    /// Get all custom column widths (column index → width in characters).
    pub fn custom_column_widths(&self) -> &BTreeMap<u16, f64> {
        &self.column_widths
    }

    // === Internal ===

    /// Get the style pool
    pub fn style_pool(&self) -> &StylePool {
        &self.style_pool
    }

    /// Validate cell position
    fn validate_cell_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col as u32, MAX_COLS - 1));
        }
        Ok(())
    }

    /// Get the number of styled cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the worksheet has no styled cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all styled cells in row-major order: (row, col, style index)
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, u32)> + '_ {
        self.cells.iter().map(|(&(row, col), &idx)| (row, col, idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_style_roundtrip() {
        let mut ws = Worksheet::new("Sheet1");
        let red = Style::new().fill_color(Color::RED);

        ws.set_cell_style_at(2, 1, &red).unwrap();

        assert_eq!(ws.cell_style_at(2, 1), Some(&red));
        assert_eq!(ws.cell_style("B3").unwrap(), Some(&red));
        assert_eq!(ws.cell_style_at(0, 0), None);
        assert_eq!(ws.cell_count(), 1);
    }

    #[test]
    fn test_shared_styles_share_index() {
        let mut ws = Worksheet::new("Sheet1");
        let red = Style::new().fill_color(Color::RED);

        ws.set_cell_style_at(0, 0, &red).unwrap();
        ws.set_cell_style_at(5, 7, &red).unwrap();

        assert_eq!(ws.cell_style_index_at(0, 0), ws.cell_style_index_at(5, 7));
        assert_eq!(ws.style_pool().len(), 2);
    }

    #[test]
    fn test_default_style_clears_cell() {
        let mut ws = Worksheet::new("Sheet1");
        ws.set_cell_style_at(0, 0, &Style::new().fill_color(Color::RED))
            .unwrap();
        ws.set_cell_style_at(0, 0, &Style::default()).unwrap();
        assert!(ws.is_empty());
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut ws = Worksheet::new("Sheet1");
        let style = Style::new().fill_color(Color::WHITE);
        ws.set_cell_style_at(1, 0, &style).unwrap();
        ws.set_cell_style_at(0, 1, &style).unwrap();
        ws.set_cell_style_at(0, 0, &style).unwrap();

        let order: Vec<_> = ws.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0)]);
        assert_eq!(ws.used_range().unwrap().to_string(), "A1:B2");
    }

    #[test]
    fn test_out_of_bounds_positions() {
        let mut ws = Worksheet::new("Sheet1");
        let style = Style::new().fill_color(Color::BLACK);
        assert!(matches!(
            ws.set_cell_style_at(MAX_ROWS, 0, &style),
            Err(Error::RowOutOfBounds(..))
        ));
        assert!(matches!(
            ws.set_cell_style_at(0, MAX_COLS, &style),
            Err(Error::ColumnOutOfBounds(..))
        ));
    }

    #[test]
    fn test_row_and_column_dimensions() {
        let mut ws = Worksheet::new("Sheet1");
        assert_eq!(ws.row_height(0), DEFAULT_ROW_HEIGHT);
        assert_eq!(ws.column_width(0), DEFAULT_COLUMN_WIDTH);

        ws.set_row_height(0, 20.0).unwrap();
        ws.set_column_width(2, 3.0).unwrap();
        assert_eq!(ws.row_height(0), 20.0);
        assert_eq!(ws.column_width(2), 3.0);
        assert_eq!(ws.custom_column_widths().len(), 1);

        // Resetting to the default drops the custom entry
        ws.set_row_height(0, DEFAULT_ROW_HEIGHT).unwrap();
        assert!(ws.custom_row_heights().is_empty());

        assert!(ws.set_row_height(1, f64::NAN).is_err());
        assert!(ws.set_column_width(1, -1.0).is_err());
        assert!(ws.set_column_width(1, MAX_COLUMN_WIDTH + 1.0).is_err());
    }
}
