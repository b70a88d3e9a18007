//! Readiness-gated export flow and artifact delivery.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use edupaz_model::{FormState, missing_required_fields, sanitize};

use crate::common::FILENAME_PREFIX;
use crate::docx::DocxEncoder;
use crate::document::project_document;
use crate::encoder::{DocumentEncoder, SheetEncoder};
use crate::error::{ExportError, Result};
use crate::sheet::project_sheet;
use crate::xlsx::XlsxEncoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Spreadsheet (`.xlsx`).
    Xlsx,
    /// Word-processing document (`.docx`).
    Docx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Xlsx, ExportFormat::Docx];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// `Info_Institucion_{sanitized name}.{ext}`.
pub fn export_filename(institution_name: &str, format: ExportFormat) -> String {
    format!(
        "{FILENAME_PREFIX}{}.{}",
        sanitize(institution_name),
        format.extension()
    )
}

/// An encoded export, ready to hand to an [`ExportSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    fn for_state(state: &FormState, format: ExportFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            filename: export_filename(&state.general().name, format),
            bytes,
        }
    }
}

/// Project and encode the spreadsheet export.
///
/// # Errors
///
/// [`ExportError::NotReady`] when the readiness check fails (the projector
/// and encoder are not called), or the encoder's serialization error.
pub fn export_spreadsheet<E>(state: &FormState, encoder: &E) -> Result<ExportArtifact>
where
    E: SheetEncoder + ?Sized,
{
    ensure_ready(state)?;
    let sheet = project_sheet(state);
    let bytes = encoder.encode_sheet(&sheet)?;
    Ok(ExportArtifact::for_state(state, ExportFormat::Xlsx, bytes))
}

/// Project and encode the document export.
///
/// # Errors
///
/// Same as [`export_spreadsheet`].
pub fn export_document<E>(state: &FormState, encoder: &E) -> Result<ExportArtifact>
where
    E: DocumentEncoder + ?Sized,
{
    ensure_ready(state)?;
    let document = project_document(state);
    let bytes = encoder.encode_document(&document)?;
    Ok(ExportArtifact::for_state(state, ExportFormat::Docx, bytes))
}

/// Export with the built-in encoder for `format`.
pub fn export(state: &FormState, format: ExportFormat) -> Result<ExportArtifact> {
    match format {
        ExportFormat::Xlsx => export_spreadsheet(state, &XlsxEncoder),
        ExportFormat::Docx => export_document(state, &DocxEncoder),
    }
}

fn ensure_ready(state: &FormState) -> Result<()> {
    let missing = missing_required_fields(state);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ExportError::NotReady { missing })
    }
}

/// Makes an exported artifact available to the user.
pub trait ExportSink {
    /// Deliver the artifact and return where it ended up.
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf>;
}

/// Writes artifacts into a directory, creating it when needed.
///
/// Bytes go to a hidden temporary file that is renamed into place, so a
/// failed write never leaves a file under the final name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::io(&self.dir, source))?;
        let target = self.dir.join(&artifact.filename);
        let staging = self.dir.join(format!(".{}.partial", artifact.filename));
        if let Err(source) = fs::write(&staging, &artifact.bytes) {
            let _ = fs::remove_file(&staging);
            return Err(ExportError::io(&staging, source));
        }
        fs::rename(&staging, &target).map_err(|source| {
            let _ = fs::remove_file(&staging);
            ExportError::io(&target, source)
        })?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        assert_eq!(
            export_filename("Escuela Rural #1", ExportFormat::Xlsx),
            "Info_Institucion_Escuela_Rural_1.xlsx"
        );
        assert_eq!(
            export_filename("IE Test", ExportFormat::Docx),
            "Info_Institucion_IE_Test.docx"
        );
        assert_eq!(export_filename("", ExportFormat::Docx), "Info_Institucion_.docx");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ExportFormat::Xlsx.to_string(), "xlsx");
        assert_eq!(ExportFormat::Docx.to_string(), "docx");
    }
}
