//! Export readiness check.

use crate::field::GeneralField;
use crate::form::FormState;
use crate::text;

/// Returns true when both the institution name and municipality contain
/// something other than whitespace.
pub fn is_ready(state: &FormState) -> bool {
    missing_required_fields(state).is_empty()
}

/// Required general fields that are blank after trimming, in form order.
pub fn missing_required_fields(state: &FormState) -> Vec<GeneralField> {
    GeneralField::ALL
        .into_iter()
        .filter(|field| is_blank(state.general().get(*field)))
        .collect()
}

fn is_blank(value: &str) -> bool {
    text::trim(value).is_empty()
}
