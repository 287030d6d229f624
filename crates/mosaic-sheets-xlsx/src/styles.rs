//! XLSX styles (styles.xml) writing

use std::collections::HashMap;

use mosaic_sheets_core::style::{Color, FillStyle, Style};
use mosaic_sheets_core::Workbook;

#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    /// Global, deduplicated styles. Index corresponds to the cellXfs index (xfId).
    styles: Vec<Style>,
    /// Per-worksheet mapping: local worksheet style index -> global xfId.
    sheet_maps: Vec<HashMap<u32, u32>>,
}

impl XlsxStyleTable {
    pub(crate) fn build(workbook: &Workbook) -> Self {
        let mut styles: Vec<Style> = Vec::new();
        let mut style_to_xf: HashMap<Style, u32> = HashMap::new();

        // Index 0 is always default style
        let default = Style::default();
        styles.push(default);
        style_to_xf.insert(default, 0);

        let mut sheet_maps: Vec<HashMap<u32, u32>> = Vec::with_capacity(workbook.sheet_count());

        for sheet in workbook.worksheets() {
            let mut map: HashMap<u32, u32> = HashMap::new();
            map.insert(0, 0);

            for (local_idx, style) in sheet.style_pool().iter() {
                let xf_id = *style_to_xf.entry(*style).or_insert_with(|| {
                    styles.push(*style);
                    (styles.len() - 1) as u32
                });
                map.insert(local_idx, xf_id);
            }

            sheet_maps.push(map);
        }

        log::trace!("style table holds {} cell formats", styles.len());

        Self { styles, sheet_maps }
    }

    pub(crate) fn xf_id_for(&self, sheet_index: usize, local_style_index: u32) -> u32 {
        self.sheet_maps
            .get(sheet_index)
            .and_then(|m| m.get(&local_style_index).copied())
            .unwrap_or(0)
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        // Excel requires the first two fills to be none and gray125; they are
        // written literally below, so custom fills start at id 2.
        const RESERVED_FILLS: u32 = 2;

        let mut fill_ids: HashMap<FillStyle, u32> = HashMap::new();
        let mut fills: Vec<FillStyle> = Vec::new();
        let mut xf_fill_ids: Vec<u32> = Vec::with_capacity(self.styles.len());

        for style in &self.styles {
            let fill_id = match style.fill {
                FillStyle::None => 0,
                fill => *fill_ids.entry(fill).or_insert_with(|| {
                    fills.push(fill);
                    RESERVED_FILLS + fills.len() as u32 - 1
                }),
            };
            xf_fill_ids.push(fill_id);
        }

        let mut xml = String::new();
        xml.push_str(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <fonts count="1">
    <font><sz val="11"/><name val="Calibri"/><family val="2"/></font>
  </fonts>"#,
        );

        xml.push_str(&format!(
            "\n  <fills count=\"{}\">",
            fills.len() as u32 + RESERVED_FILLS
        ));
        xml.push_str("\n    <fill><patternFill patternType=\"none\"/></fill>");
        xml.push_str("\n    <fill><patternFill patternType=\"gray125\"/></fill>");
        for fill in &fills {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(fill));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(
            r#"
  <borders count="1">
    <border><left/><right/><top/><bottom/><diagonal/></border>
  </borders>
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.styles.len()));
        for fill_id in &xf_fill_ids {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(*fill_id));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
        );
        xml
    }
}

fn write_color(tag: &str, color: &Color) -> String {
    match color {
        Color::Auto => format!("<{tag} indexed=\"64\"/>"),
        Color::Rgb { .. } => format!("<{tag} rgb=\"{}\"/>", color.to_argb_hex()),
    }
}

/// Solid fills carry the same color as start (fg) and end (bg) color.
fn write_fill(fill: &FillStyle) -> String {
    match fill {
        FillStyle::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        FillStyle::Solid { color } => format!(
            "<fill><patternFill patternType=\"solid\">{}{}</patternFill></fill>",
            write_color("fgColor", color),
            write_color("bgColor", color)
        ),
    }
}

fn write_xf(fill_id: u32) -> String {
    if fill_id == 0 {
        "<xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>".to_string()
    } else {
        format!(
            "<xf numFmtId=\"0\" fontId=\"0\" fillId=\"{}\" borderId=\"0\" xfId=\"0\" applyFill=\"1\"/>",
            fill_id
        )
    }
}
