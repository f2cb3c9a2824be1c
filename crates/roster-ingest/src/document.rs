//! Input document tree: tables of rows of cells with rendered text.
//!
//! The tree is the contract with the document converter. Any converter that
//! can report table/row/cell structure and the rendered text of each cell
//! can build it directly; [`Document::from_html`] covers converted markup.

/// Whether a cell came from a header (`<th>`) or data (`<td>`) element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellKind {
    Header,
    #[default]
    Data,
}

/// One cell with its rendered text (line breaks preserved).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub kind: CellKind,
}

impl Cell {
    pub fn data(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CellKind::Data,
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CellKind::Header,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Builds a row of data cells.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Cell::data).collect())
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cell texts joined by line breaks.
    pub fn text(&self) -> String {
        join_lines(self.cells.iter().map(|cell| cell.text.as_str()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn text(&self) -> String {
        join_lines(self.rows.iter().map(Row::text))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub tables: Vec<Table>,
    /// Rendered text of the whole source, including text outside tables.
    /// Empty when the tree was built without one.
    pub body: String,
}

impl Document {
    pub fn new(tables: Vec<Table>) -> Self {
        Self {
            tables,
            body: String::new(),
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// The rendered source text when known, else every table's text, in
    /// document order.
    pub fn text(&self) -> String {
        if self.body.is_empty() {
            join_lines(self.tables.iter().map(Table::text))
        } else {
            self.body.clone()
        }
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|table| table.rows.len()).sum()
    }
}

fn join_lines<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(part);
    }
    out
}
