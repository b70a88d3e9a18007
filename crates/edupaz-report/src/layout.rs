//! Format-neutral layouts produced by the projectors.
//!
//! Encoders consume these; nothing here knows about OOXML.

/// Role of a spreadsheet row. Encoders may style rows by kind; the cell
/// text is the same regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Title,
    Field,
    Blank,
    Header,
    Data,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub kind: RowKind,
    pub cells: Vec<String>,
}

impl SheetRow {
    pub fn new<I, S>(kind: RowKind, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn blank() -> Self {
        Self {
            kind: RowKind::Blank,
            cells: Vec::new(),
        }
    }
}

/// A single worksheet laid out row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

impl SheetLayout {
    /// Cell text of every row, for comparisons that ignore row kinds.
    pub fn cell_text(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(String::as_str).collect())
            .collect()
    }

    /// Widest row, in cells.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    /// Share of the table width, in percent.
    pub width_pct: u8,
}

/// A table with one header row and any number of body rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl TableLayout {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row count including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Heading(String),
    /// `label: value`, label emphasized.
    LabeledField { label: String, value: String },
    Table(TableLayout),
}

/// A flowing document: blocks in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentLayout {
    pub blocks: Vec<Block>,
}

impl DocumentLayout {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableLayout> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }
}
