//! Document projection.

use edupaz_model::{FormState, GeneralField};

use crate::common::{FORM_TITLE, GENERAL_SECTION, TIMELINE_HEADERS, TIMELINE_SECTION, general_label};
use crate::layout::{Block, DocumentLayout, TableColumn, TableLayout};

/// Project the form into a document: title, general section with the two
/// labeled fields, then the timeline section with one table.
pub fn project_document(state: &FormState) -> DocumentLayout {
    let general = state.general();
    let mut doc = DocumentLayout::default();
    doc.push(Block::Title(FORM_TITLE.to_string()));
    doc.push(Block::Heading(GENERAL_SECTION.to_string()));
    for field in GeneralField::ALL {
        doc.push(Block::LabeledField {
            label: general_label(field).to_string(),
            value: general.get(field).to_string(),
        });
    }
    doc.push(Block::Heading(TIMELINE_SECTION.to_string()));
    doc.push(Block::Table(timeline_table(state)));
    doc
}

fn timeline_table(state: &FormState) -> TableLayout {
    let width_pct = (100 / TIMELINE_HEADERS.len()) as u8;
    let columns = TIMELINE_HEADERS
        .iter()
        .map(|header| TableColumn {
            header: (*header).to_string(),
            width_pct,
        })
        .collect();
    let rows = state
        .events()
        .iter()
        .map(|event| event.values().map(str::to_string).to_vec())
        .collect();
    TableLayout { columns, rows }
}
