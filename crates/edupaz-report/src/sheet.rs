//! Spreadsheet projection.

use edupaz_model::{FormState, GeneralField};

use crate::common::{FORM_TITLE, SHEET_NAME, TIMELINE_HEADERS, TIMELINE_TITLE, general_label};
use crate::layout::{RowKind, SheetLayout, SheetRow};

/// Number of rows before the first timeline event.
pub const FIXED_ROWS: usize = 6;

/// Project the form into the `Datos` worksheet.
///
/// Rows: title, name, municipality, blank, timeline title, column headers,
/// then one row per event in timeline order. Empty values stay empty.
pub fn project_sheet(state: &FormState) -> SheetLayout {
    let general = state.general();
    let mut rows = Vec::with_capacity(FIXED_ROWS + state.events().len());
    rows.push(SheetRow::new(RowKind::Title, [FORM_TITLE]));
    for field in GeneralField::ALL {
        rows.push(SheetRow::new(
            RowKind::Field,
            [general_label(field), general.get(field)],
        ));
    }
    rows.push(SheetRow::blank());
    rows.push(SheetRow::new(RowKind::Title, [TIMELINE_TITLE]));
    rows.push(SheetRow::new(RowKind::Header, TIMELINE_HEADERS));
    for event in state.events() {
        rows.push(SheetRow::new(RowKind::Data, event.values()));
    }
    SheetLayout {
        name: SHEET_NAME.to_string(),
        rows,
    }
}
