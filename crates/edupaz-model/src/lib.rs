//! Form state for the "Información general de la Institución" form.
//!
//! The crate owns the data model only: general information about the
//! institution, the ordered list of timeline events, the readiness check that
//! gates exports, and the filename sanitizer. Projections into documents live
//! in `edupaz-report`.

pub mod error;
pub mod field;
pub mod form;
pub mod readiness;
pub mod sanitize;
pub mod text;

pub use error::{FormError, Result};
pub use field::{EventField, GeneralField};
pub use form::{FormState, GeneralInfo, TimelineEvent};
pub use readiness::{is_ready, missing_required_fields};
pub use sanitize::sanitize;
