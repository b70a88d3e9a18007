//! On-screen preview of the final table.
//!
//! Every row repeats the general information next to one event, and empty
//! values show [`PREVIEW_PLACEHOLDER`]. Exports never use this.

use edupaz_model::FormState;

use crate::common::PREVIEW_PLACEHOLDER;

pub const PREVIEW_HEADERS: [&str; 6] = [
    "Nombre de la Institución",
    "Municipio",
    "Tiempo / época",
    "Contexto local",
    "Transformaciones positivas",
    "Solidaridad destacada",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTable {
    pub headers: [&'static str; 6],
    pub rows: Vec<[String; 6]>,
}

pub fn preview_table(state: &FormState) -> PreviewTable {
    let general = state.general();
    let rows = state
        .events()
        .iter()
        .map(|event| {
            let [period, context, positive, solidarity] = event.values();
            [
                general.name.as_str(),
                general.municipality.as_str(),
                period,
                context,
                positive,
                solidarity,
            ]
            .map(or_placeholder)
        })
        .collect();
    PreviewTable {
        headers: PREVIEW_HEADERS,
        rows,
    }
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        PREVIEW_PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use edupaz_model::{EventField, GeneralField};

    use super::*;

    #[test]
    fn test_empty_values_show_placeholder() {
        let mut state = FormState::new();
        state.set_general(GeneralField::Name, "IE Test");
        state.update_event(0, EventField::Context, "c").unwrap();

        let preview = preview_table(&state);
        assert_eq!(preview.rows.len(), 1);
        assert_eq!(preview.rows[0], ["IE Test", "—", "—", "c", "—", "—"].map(String::from));
    }

    #[test]
    fn test_whitespace_is_not_replaced() {
        let mut state = FormState::new();
        state.update_event(0, EventField::Period, " ").unwrap();
        assert_eq!(preview_table(&state).rows[0][2], " ");
    }

    #[test]
    fn test_no_events_no_rows() {
        let mut state = FormState::new();
        state.remove_event(0).unwrap();
        assert!(preview_table(&state).rows.is_empty());
    }
}
