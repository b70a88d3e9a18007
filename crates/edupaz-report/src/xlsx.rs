//! XLSX (SpreadsheetML) encoder.

use anyhow::{Result, bail};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::common::{
    ContentOverride, OFFICE_DOCUMENT_REL, OFFICE_RELS_NS, Package, STYLES_REL, is_xml_char,
    write_content_types, write_preserved_text, write_relationships,
};
use crate::encoder::SheetEncoder;
use crate::error::ExportError;
use crate::export::ExportFormat;
use crate::layout::{RowKind, SheetLayout};

/// SpreadsheetML main namespace.
const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const WORKSHEET_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";

const WORKBOOK_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
const WORKSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";
const STYLES_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml";

/// Cell style index of the bold format in [`STYLES_XML`].
const BOLD_STYLE: &str = "1";

/// Two fonts (regular, bold) and the matching cell formats.
const STYLES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    r#"<fonts count="2">"#,
    r#"<font><sz val="11"/><name val="Calibri"/><family val="2"/></font>"#,
    r#"<font><b/><sz val="11"/><name val="Calibri"/><family val="2"/></font>"#,
    r#"</fonts>"#,
    r#"<fills count="2"><fill><patternFill patternType="none"/></fill>"#,
    r#"<fill><patternFill patternType="gray125"/></fill></fills>"#,
    r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
    r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
    r#"<cellXfs count="2">"#,
    r#"<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>"#,
    r#"<xf numFmtId="0" fontId="1" fillId="0" borderId="0" xfId="0" applyFont="1"/>"#,
    r#"</cellXfs>"#,
    r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
    r#"</styleSheet>"#,
);

/// Most UTF-16 code units a cell may hold.
const MAX_CELL_LEN: usize = 32_767;

/// Column width, in characters, of the populated columns.
const COLUMN_WIDTH: &str = "40";

/// Writes a single-worksheet `.xlsx` package with inline-string cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxEncoder;

impl SheetEncoder for XlsxEncoder {
    fn encode_sheet(&self, sheet: &SheetLayout) -> crate::error::Result<Vec<u8>> {
        write_workbook(sheet).map_err(|error| ExportError::serialization(ExportFormat::Xlsx, &error))
    }
}

fn write_workbook(sheet: &SheetLayout) -> Result<Vec<u8>> {
    let mut package = Package::new();
    write_content_types(
        &mut package,
        &[
            ContentOverride {
                part: "/xl/workbook.xml",
                content_type: WORKBOOK_CONTENT_TYPE,
            },
            ContentOverride {
                part: "/xl/worksheets/sheet1.xml",
                content_type: WORKSHEET_CONTENT_TYPE,
            },
            ContentOverride {
                part: "/xl/styles.xml",
                content_type: STYLES_CONTENT_TYPE,
            },
        ],
    )?;
    write_relationships(
        &mut package,
        "_rels/.rels",
        &[("rId1", OFFICE_DOCUMENT_REL, "xl/workbook.xml")],
    )?;
    write_relationships(
        &mut package,
        "xl/_rels/workbook.xml.rels",
        &[
            ("rId1", WORKSHEET_REL, "worksheets/sheet1.xml"),
            ("rId2", STYLES_REL, "styles.xml"),
        ],
    )?;
    package.add_xml_part("xl/workbook.xml", |xml| write_workbook_part(xml, &sheet.name))?;
    package.add_part("xl/styles.xml", STYLES_XML.as_bytes())?;
    package.add_xml_part("xl/worksheets/sheet1.xml", |xml| write_worksheet(xml, sheet))?;
    package.finish()
}

fn write_workbook_part(xml: &mut Writer<Vec<u8>>, sheet_name: &str) -> Result<()> {
    let mut root = BytesStart::new("workbook");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    root.push_attribute(("xmlns:r", OFFICE_RELS_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("sheets")))?;
    let mut node = BytesStart::new("sheet");
    node.push_attribute(("name", sheet_name));
    node.push_attribute(("sheetId", "1"));
    node.push_attribute(("r:id", "rId1"));
    xml.write_event(Event::Empty(node))?;
    xml.write_event(Event::End(BytesEnd::new("sheets")))?;
    xml.write_event(Event::End(BytesEnd::new("workbook")))?;
    Ok(())
}

fn write_worksheet(xml: &mut Writer<Vec<u8>>, sheet: &SheetLayout) -> Result<()> {
    let mut root = BytesStart::new("worksheet");
    root.push_attribute(("xmlns", SPREADSHEET_NS));
    xml.write_event(Event::Start(root))?;

    let columns = sheet.column_count();
    if columns > 0 {
        let max = columns.to_string();
        xml.write_event(Event::Start(BytesStart::new("cols")))?;
        let mut col = BytesStart::new("col");
        col.push_attribute(("min", "1"));
        col.push_attribute(("max", max.as_str()));
        col.push_attribute(("width", COLUMN_WIDTH));
        col.push_attribute(("customWidth", "1"));
        xml.write_event(Event::Empty(col))?;
        xml.write_event(Event::End(BytesEnd::new("cols")))?;
    }

    xml.write_event(Event::Start(BytesStart::new("sheetData")))?;
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let row_ref = (row_idx + 1).to_string();
        let mut row_node = BytesStart::new("row");
        row_node.push_attribute(("r", row_ref.as_str()));
        if row.cells.is_empty() {
            xml.write_event(Event::Empty(row_node))?;
            continue;
        }
        xml.write_event(Event::Start(row_node))?;
        let bold = matches!(row.kind, RowKind::Title | RowKind::Header);
        for (col_idx, text) in row.cells.iter().enumerate() {
            let cell_ref = format!("{}{}", column_name(col_idx), row_ref);
            let len = text.encode_utf16().count();
            if len > MAX_CELL_LEN {
                bail!("cell {cell_ref} holds {len} characters, over the {MAX_CELL_LEN} limit");
            }
            let mut cell = BytesStart::new("c");
            cell.push_attribute(("r", cell_ref.as_str()));
            if bold {
                cell.push_attribute(("s", BOLD_STYLE));
            }
            cell.push_attribute(("t", "inlineStr"));
            xml.write_event(Event::Start(cell))?;
            xml.write_event(Event::Start(BytesStart::new("is")))?;
            write_preserved_text(xml, "t", &escape_cell_text(text))?;
            xml.write_event(Event::End(BytesEnd::new("is")))?;
            xml.write_event(Event::End(BytesEnd::new("c")))?;
        }
        xml.write_event(Event::End(BytesEnd::new("row")))?;
    }
    xml.write_event(Event::End(BytesEnd::new("sheetData")))?;
    xml.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(())
}

/// Escape what XML cannot carry as `_xHHHH_`, and a literal `_xHHHH_` as
/// `_x005F_xHHHH_`, so the reader gets the original text back.
fn escape_cell_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        if ch == '_' && is_escape_tail(&text[idx + 1..]) {
            out.push_str("_x005F_");
        } else if ch == '\r' || !is_xml_char(ch) {
            out.push_str(&format!("_x{:04X}_", u32::from(ch)));
        } else {
            out.push(ch);
        }
    }
    out
}

/// `xHHHH_` at the start of `rest`.
fn is_escape_tail(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    bytes.len() >= 6
        && bytes[0] == b'x'
        && bytes[1..5].iter().all(u8::is_ascii_hexdigit)
        && bytes[5] == b'_'
}

/// Zero-based column index to A1 letters (`0` → `A`, `26` → `AA`).
fn column_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SheetRow;

    #[test]
    fn test_column_names() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(3), "D");
        assert_eq!(column_name(25), "Z");
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_escape_cell_text() {
        assert_eq!(escape_cell_text("IE Test"), "IE Test");
        assert_eq!(escape_cell_text("a\u{1}b\u{b}"), "a_x0001_b_x000B_");
        assert_eq!(escape_cell_text("uno\r\ndos"), "uno_x000D_\ndos");
        assert_eq!(escape_cell_text("_x0041_"), "_x005F_x0041_");
        assert_eq!(escape_cell_text("snake_case_x"), "snake_case_x");
    }

    fn one_cell_sheet(text: String) -> SheetLayout {
        SheetLayout {
            name: "Datos".to_string(),
            rows: vec![SheetRow::new(RowKind::Data, vec![text])],
        }
    }

    #[test]
    fn test_cell_at_limit_is_written() {
        assert!(write_workbook(&one_cell_sheet("a".repeat(MAX_CELL_LEN))).is_ok());
    }

    #[test]
    fn test_oversized_cell_names_reference() {
        let err = write_workbook(&one_cell_sheet("a".repeat(MAX_CELL_LEN + 1))).unwrap_err();
        assert!(format!("{err:#}").contains("cell A1 holds 32768 characters"));
    }
}
