//! Error types for export generation.

use std::path::PathBuf;

use thiserror::Error;

use edupaz_model::GeneralField;

use crate::export::ExportFormat;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExportError {
    /// Readiness check failed; nothing was projected.
    #[error("form is not ready for export: {} must not be blank", field_list(.missing))]
    NotReady { missing: Vec<GeneralField> },

    /// The encoder could not produce the container.
    #[error("{format} serialization failed: {message}")]
    Serialization { format: ExportFormat, message: String },

    /// The export sink could not store the artifact.
    #[error("write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Wrap an encoder failure, keeping the whole context chain.
    pub fn serialization(format: ExportFormat, error: &anyhow::Error) -> Self {
        Self::Serialization {
            format,
            message: format!("{error:#}"),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn field_list(fields: &[GeneralField]) -> String {
    fields
        .iter()
        .map(GeneralField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
