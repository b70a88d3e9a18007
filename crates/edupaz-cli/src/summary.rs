use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use edupaz_model::{FormState, GeneralField};
use edupaz_report::{PREVIEW_PLACEHOLDER, general_label, preview_table};

use crate::commands::DeliveredExport;

pub fn print_form(state: &FormState) {
    let mut general = Table::new();
    apply_table_style(&mut general);
    for field in GeneralField::ALL {
        general.add_row(vec![
            header_cell(general_label(field)),
            value_cell(state.general().get(field)),
        ]);
    }
    println!("{general}");

    let preview = preview_table(state);
    let mut table = Table::new();
    table.set_header(
        std::iter::once(header_cell("#"))
            .chain(preview.headers.iter().map(|label| header_cell(label)))
            .collect::<Vec<_>>(),
    );
    apply_preview_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (idx, row) in preview.rows.iter().enumerate() {
        let mut cells = vec![dim_cell(idx)];
        cells.extend(row.iter().map(|value| value_cell(value)));
        table.add_row(cells);
    }
    println!();
    println!("Vista previa (tabla final):");
    if preview.rows.is_empty() {
        println!("(sin eventos)");
    } else {
        println!("{table}");
    }
}

pub fn print_readiness(missing: &[GeneralField]) {
    if missing.is_empty() {
        println!("Ready to export.");
        return;
    }
    eprintln!("Not ready to export. Fill in:");
    for field in missing {
        eprintln!("- {} ({field})", general_label(*field));
    }
}

pub fn print_export_summary(delivered: &[DeliveredExport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Format"),
        header_cell("File"),
        header_cell("Bytes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for export in delivered {
        table.add_row(vec![
            Cell::new(export.format.to_string().to_uppercase())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(export.path.display()),
            Cell::new(export.bytes),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_preview_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() || value == PREVIEW_PLACEHOLDER {
        dim_cell(PREVIEW_PLACEHOLDER)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
