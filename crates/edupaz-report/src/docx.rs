//! DOCX (WordprocessingML) encoder.

use std::io::Cursor;

use anyhow::{Context, Result};
use docx_rs::{
    BreakType, Docx, Paragraph, Run, Style, StyleType, Table, TableCell, TableRow, WidthType,
};

use crate::common::{normalize_newlines, strip_invalid_xml};
use crate::encoder::DocumentEncoder;
use crate::error::ExportError;
use crate::export::ExportFormat;
use crate::layout::{Block, DocumentLayout, TableLayout};

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// `pct` table widths are expressed in fiftieths of a percent.
const PCT_UNITS_PER_PERCENT: usize = 50;

/// Text column width of an A4 page with 1" margins, in twentieths of a point.
const TEXT_WIDTH_TWIPS: usize = 9026;

/// Writes a single-section `.docx` package.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxEncoder;

impl DocumentEncoder for DocxEncoder {
    fn encode_document(&self, document: &DocumentLayout) -> crate::error::Result<Vec<u8>> {
        write_docx(document).map_err(|error| ExportError::serialization(ExportFormat::Docx, &error))
    }
}

fn write_docx(document: &DocumentLayout) -> Result<Vec<u8>> {
    let mut docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(48)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("heading 1")
                .size(32)
                .bold(),
        );

    for block in &document.blocks {
        docx = match block {
            Block::Title(text) => docx.add_paragraph(styled_paragraph(TITLE_STYLE, text)),
            Block::Heading(text) => docx.add_paragraph(styled_paragraph(HEADING_STYLE, text)),
            Block::LabeledField { label, value } => {
                let mut paragraph = Paragraph::new().add_run(text_run(&format!("{label}: ")).bold());
                if !value.is_empty() {
                    paragraph = paragraph.add_run(text_run(value));
                }
                docx.add_paragraph(paragraph)
            }
            Block::Table(table) => docx.add_table(build_table(table)),
        };
    }
    // A body may not end on a table.
    docx = docx.add_paragraph(Paragraph::new());

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).context("pack document")?;
    Ok(buffer.into_inner())
}

fn styled_paragraph(style: &str, text: &str) -> Paragraph {
    Paragraph::new().style(style).add_run(text_run(text))
}

/// One run; line breaks in `text` become `<w:br/>`, characters XML cannot
/// carry are dropped.
fn text_run(text: &str) -> Run {
    let normalized = normalize_newlines(text);
    let text = strip_invalid_xml(&normalized);
    let mut run = Run::new();
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    run
}

fn build_table(table: &TableLayout) -> Table {
    let widths: Vec<usize> = table
        .columns
        .iter()
        .map(|column| usize::from(column.width_pct))
        .collect();
    let grid = widths
        .iter()
        .map(|percent| TEXT_WIDTH_TWIPS * percent / 100)
        .collect();

    let header: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
    let mut rows = vec![table_row(&header, &widths)];
    for row in &table.rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        rows.push(table_row(&cells, &widths));
    }

    Table::new(rows)
        .set_grid(grid)
        .width(100 * PCT_UNITS_PER_PERCENT, WidthType::Pct)
}

fn table_row(cells: &[&str], widths: &[usize]) -> TableRow {
    let cells = cells
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            // Every cell needs a paragraph, even when empty.
            let mut paragraph = Paragraph::new();
            if !text.is_empty() {
                paragraph = paragraph.add_run(text_run(text));
            }
            let cell = TableCell::new().add_paragraph(paragraph);
            match widths.get(idx) {
                Some(percent) => cell.width(percent * PCT_UNITS_PER_PERCENT, WidthType::Pct),
                None => cell,
            }
        })
        .collect();
    TableRow::new(cells)
}

