//! Encoder seams between projections and file formats.
//!
//! Projectors hand a layout to an encoder and get bytes back. Tests can
//! substitute their own encoders without touching any file format.

use crate::error::Result;
use crate::layout::{DocumentLayout, SheetLayout};

/// Serializes a worksheet layout into a spreadsheet container.
pub trait SheetEncoder {
    /// # Errors
    ///
    /// Returns [`ExportError::Serialization`](crate::ExportError::Serialization)
    /// when the container cannot be produced. No partial output is returned.
    fn encode_sheet(&self, sheet: &SheetLayout) -> Result<Vec<u8>>;
}

/// Serializes a document layout into a word-processing container.
pub trait DocumentEncoder {
    /// # Errors
    ///
    /// Returns [`ExportError::Serialization`](crate::ExportError::Serialization)
    /// when the container cannot be produced. No partial output is returned.
    fn encode_document(&self, document: &DocumentLayout) -> Result<Vec<u8>>;
}
