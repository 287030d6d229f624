//! Grid renderer: color grid -> single-sheet workbook

use std::path::Path;

use mosaic_sheets_core::workbook::DEFAULT_SHEET_NAME;
use mosaic_sheets_core::{Color, Error, Style, Workbook, Worksheet, MAX_COLS, MAX_ROWS};
use mosaic_sheets_xlsx::XlsxWriter;

use crate::error::{MosaicError, MosaicResult};
use crate::grid::ColorGrid;
use crate::options::MosaicOptions;

/// Paint `grid` onto a new workbook using the default cell dimensions
///
/// Grid position (i, j) becomes spreadsheet cell (i + 1, j + 1), solid-filled
/// with that color.
pub fn create_document(grid: &ColorGrid) -> MosaicResult<Workbook> {
    create_document_with(grid, &MosaicOptions::default())
}

/// Paint `grid` onto a new workbook using the cell dimensions in `options`
pub fn create_document_with(grid: &ColorGrid, options: &MosaicOptions) -> MosaicResult<Workbook> {
    if grid.is_empty() {
        return Err(MosaicError::EmptyGrid {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let rows = u32::try_from(grid.rows()).unwrap_or(u32::MAX);
    if rows > MAX_ROWS {
        return Err(Error::RowOutOfBounds(rows - 1, MAX_ROWS - 1).into());
    }
    let cols = u32::try_from(grid.cols()).unwrap_or(u32::MAX);
    if cols > MAX_COLS as u32 {
        return Err(Error::ColumnOutOfBounds(cols - 1, MAX_COLS - 1).into());
    }

    let mut sheet = Worksheet::new(DEFAULT_SHEET_NAME);

    for col in 0..cols as u16 {
        sheet.set_column_width(col, options.cell_width)?;
    }

    for (row, colors) in (0..rows).zip(grid.iter_rows()) {
        sheet.set_row_height(row, options.row_height)?;
        for (col, &rgb) in (0..cols as u16).zip(colors) {
            let style = Style::new().fill_color(Color::from(rgb));
            sheet.set_cell_style_at(row, col, &style)?;
        }
    }

    log::debug!(
        "rendered {} rows x {} columns using {} distinct fills",
        rows,
        cols,
        sheet.style_pool().len() - 1
    );

    let mut workbook = Workbook::empty();
    workbook.add_existing_worksheet(sheet)?;
    Ok(workbook)
}

/// Write `document` as an XLSX file at `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(document: &Workbook, path: P) -> MosaicResult<()> {
    XlsxWriter::write_file(document, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Rgb;
    use pretty_assertions::assert_eq;

    fn fill_hex(wb: &Workbook, row: u32, col: u16) -> Option<String> {
        let style = wb.worksheet(0)?.cell_style_at(row, col)?;
        style.fill.color().map(|c| c.to_hex())
    }

    #[test]
    fn test_single_red_cell() {
        let grid = ColorGrid::from_rows(vec![vec![Rgb::new(255, 0, 0)]]).unwrap();
        let wb = create_document(&grid).unwrap();

        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(fill_hex(&wb, 0, 0).as_deref(), Some("FF0000"));

        let sheet = wb.worksheet(0).unwrap();
        let a1 = sheet.cell_style("A1").unwrap().unwrap();
        assert_eq!(a1.fill.color().unwrap().to_hex(), "FF0000");
    }

    #[test]
    fn test_every_cell_painted_and_sized() {
        let grid = ColorGrid::from_rows(vec![
            vec![Rgb::new(0, 0, 0), Rgb::new(1, 2, 3), Rgb::new(255, 255, 255)],
            vec![Rgb::new(16, 32, 64), Rgb::new(0, 0, 0), Rgb::new(9, 9, 9)],
        ])
        .unwrap();
        let wb = create_document(&grid).unwrap();
        let sheet = wb.worksheet(0).unwrap();

        for (i, row) in grid.iter_rows().enumerate() {
            assert_eq!(sheet.row_height(i as u32), 20.0);
            for (j, rgb) in row.iter().enumerate() {
                assert_eq!(fill_hex(&wb, i as u32, j as u16), Some(rgb.to_hex()));
            }
        }
        for j in 0..3 {
            assert_eq!(sheet.column_width(j), 3.0);
        }
        assert_eq!(sheet.cell_count(), 6);
        // Nothing painted outside the grid
        assert_eq!(sheet.used_range().unwrap().to_string(), "A1:C2");
    }

    #[test]
    fn test_custom_dimensions() {
        let grid = ColorGrid::from_rows(vec![vec![Rgb::new(5, 5, 5); 2]]).unwrap();
        let options = MosaicOptions {
            cell_width: 2.5,
            row_height: 12.0,
            ..MosaicOptions::default()
        };
        let wb = create_document_with(&grid, &options).unwrap();
        let sheet = wb.worksheet(0).unwrap();
        assert_eq!(sheet.column_width(1), 2.5);
        assert_eq!(sheet.row_height(0), 12.0);
    }

    #[test]
    fn test_empty_grids_rejected() {
        let no_rows = ColorGrid::from_rows(Vec::new()).unwrap();
        assert!(matches!(
            create_document(&no_rows),
            Err(MosaicError::EmptyGrid { rows: 0, cols: 0 })
        ));

        let no_cols = ColorGrid::from_rows(vec![Vec::new()]).unwrap();
        assert!(matches!(
            create_document(&no_cols),
            Err(MosaicError::EmptyGrid { rows: 1, cols: 0 })
        ));
    }

    #[test]
    fn test_too_many_columns_rejected() {
        let grid =
            ColorGrid::from_rows(vec![vec![Rgb::default(); MAX_COLS as usize + 1]]).unwrap();
        assert!(matches!(
            create_document(&grid),
            Err(MosaicError::Document(Error::ColumnOutOfBounds(..)))
        ));
    }
}
