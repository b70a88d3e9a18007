//! Export generation for the institution timeline form.
//!
//! Exports are produced in two steps. A projector turns a [`FormState`]
//! snapshot into a layout that carries no file-format detail:
//!
//! - [`project_sheet`]: one-sheet, row-oriented [`SheetLayout`]
//! - [`project_document`]: title, headings, labeled fields and one table
//!
//! An encoder then serializes the layout:
//!
//! - **XLSX** (SpreadsheetML) through [`XlsxEncoder`]
//! - **DOCX** (WordprocessingML) through [`DocxEncoder`]
//!
//! [`export_spreadsheet`] and [`export_document`] gate both steps on the
//! readiness check and name the artifact; an [`ExportSink`] delivers it.
//!
//! [`FormState`]: edupaz_model::FormState

mod common;
mod docx;
mod document;
mod encoder;
mod error;
mod export;
mod layout;
mod preview;
mod sheet;
mod xlsx;

pub use common::{
    FORM_TITLE, GENERAL_SECTION, MUNICIPALITY_LABEL, NAME_LABEL, PREVIEW_PLACEHOLDER, SHEET_NAME,
    TIMELINE_HEADERS, TIMELINE_SECTION, TIMELINE_TITLE, general_label,
};
pub use docx::DocxEncoder;
pub use document::project_document;
pub use encoder::{DocumentEncoder, SheetEncoder};
pub use error::{ExportError, Result};
pub use export::{
    DirectorySink, ExportArtifact, ExportFormat, ExportSink, export, export_document,
    export_filename, export_spreadsheet,
};
pub use layout::{Block, DocumentLayout, RowKind, SheetLayout, SheetRow, TableColumn, TableLayout};
pub use preview::{PREVIEW_HEADERS, PreviewTable, preview_table};
pub use sheet::project_sheet;
pub use xlsx::XlsxEncoder;
