//! XLSX writer

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::{XlsxError, XlsxResult};
use crate::styles::XlsxStyleTable;
use mosaic_sheets_core::{CellAddress, Workbook, Worksheet};

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path, replacing any existing file
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let path = path.as_ref();
        log::debug!("writing workbook to {}", path.display());
        let file = File::create(path)?;
        Self::write(workbook, BufWriter::new(file))
    }

    /// Write a workbook to a writer
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        if workbook.is_empty() {
            return Err(XlsxError::InvalidFormat(
                "workbook has no worksheets".into(),
            ));
        }

        let mut zip = zip::ZipWriter::new(writer);

        // Build a workbook-wide style table.
        let style_table = XlsxStyleTable::build(workbook);

        Self::write_content_types(&mut zip, workbook)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, workbook)?;
        Self::write_workbook_rels(&mut zip, workbook)?;
        Self::write_styles_xml(&mut zip, &style_table)?;

        for index in 0..workbook.sheet_count() {
            Self::write_worksheet(&mut zip, workbook, index, &style_table)?;
        }

        let mut inner = zip.finish()?;
        inner.flush()?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in workbook.worksheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        // Styles relationship follows the sheets
        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
            workbook.sheet_count() + 1
        ));

        content.push_str("\n</Relationships>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;
        let xml = style_table.to_styles_xml();
        zip.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
        index: usize,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;

        let sheet = workbook
            .worksheet(index)
            .ok_or_else(|| XlsxError::InvalidFormat("Sheet not found".into()))?;

        log::debug!(
            "sheet '{}': {} styled cells, {} custom rows, {} custom columns",
            sheet.name(),
            sheet.cell_count(),
            sheet.custom_row_heights().len(),
            sheet.custom_column_widths().len()
        );

        let dimension = sheet
            .used_range()
            .map(|r| r.to_a1_string())
            .unwrap_or_else(|| "A1".to_string());

        let mut content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <dimension ref="{}"/>
    <sheetFormatPr defaultRowHeight="15"/>"#,
            dimension
        );

        Self::write_cols(&mut content, sheet);

        content.push_str("\n    <sheetData>");
        Self::write_rows(&mut content, sheet, index, style_table);
        content.push_str("\n    </sheetData>");

        content.push_str("\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Emit `<cols>`, merging runs of adjacent columns that share a width.
    fn write_cols(content: &mut String, sheet: &Worksheet) {
        let widths = sheet.custom_column_widths();
        if widths.is_empty() {
            return;
        }

        let mut runs: Vec<(u16, u16, f64)> = Vec::new();
        for (&col, &width) in widths {
            match runs.last_mut() {
                Some((_, max, w)) if *max + 1 == col && *w == width => *max = col,
                _ => runs.push((col, col, width)),
            }
        }

        content.push_str("\n    <cols>");
        for (min, max, width) in runs {
            content.push_str(&format!(
                "\n        <col min=\"{}\" max=\"{}\" width=\"{}\" customWidth=\"1\"/>",
                min as u32 + 1,
                max as u32 + 1,
                width
            ));
        }
        content.push_str("\n    </cols>");
    }

    /// Emit `<row>` elements for every row that has styled cells or a custom height.
    fn write_rows(
        content: &mut String,
        sheet: &Worksheet,
        sheet_index: usize,
        style_table: &XlsxStyleTable,
    ) {
        let mut rows: BTreeMap<u32, Vec<(u16, u32)>> = sheet
            .custom_row_heights()
            .keys()
            .map(|&row| (row, Vec::new()))
            .collect();
        for (row, col, style_index) in sheet.iter_cells() {
            rows.entry(row).or_default().push((col, style_index));
        }

        for (row, cells) in rows {
            let height_attr = match sheet.custom_row_heights().get(&row) {
                Some(ht) => format!(" ht=\"{}\" customHeight=\"1\"", ht),
                None => String::new(),
            };

            if cells.is_empty() {
                content.push_str(&format!("\n        <row r=\"{}\"{}/>", row + 1, height_attr));
                continue;
            }

            content.push_str(&format!("\n        <row r=\"{}\"{}>", row + 1, height_attr));
            for (col, style_index) in cells {
                let cell_ref = CellAddress::new(row, col).to_a1_string();
                let xf_id = style_table.xf_id_for(sheet_index, style_index);
                content.push_str(&format!(
                    "\n            <c r=\"{}\" s=\"{}\"/>",
                    cell_ref, xf_id
                ));
            }
            content.push_str("\n        </row>");
        }
    }
}
