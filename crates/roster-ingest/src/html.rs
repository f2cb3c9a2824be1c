//! Markup adapter: builds a [`Document`] from converted HTML.
//!
//! Cell text approximates the browser's rendered text: `<br>` and block-level
//! elements break lines, whitespace runs inside a line collapse to one space,
//! and each line is trimmed. Header and label detection rely on those line
//! breaks inside merged cells. A table nested in a cell is read as a table of
//! its own and left out of the cell's text.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::document::{Cell, CellKind, Document, Row, Table};

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid tr selector"));

const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "div", "dl", "dt", "dd", "h1", "h2", "h3", "h4", "h5",
    "h6", "hr", "li", "ol", "p", "pre", "section", "table", "tr", "ul",
];

const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "template"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Inside one cell: nested tables are skipped.
    Cell,
    /// The whole document: cells also break lines.
    Body,
}

impl Document {
    /// Parses converted markup into a table tree.
    ///
    /// Markup without tables yields a document without tables; malformed
    /// markup is repaired by the HTML parser rather than rejected. The
    /// rendered text of the whole markup is kept as the document body.
    pub fn from_html(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        let tables = html
            .select(&TABLE_SELECTOR)
            .map(|table| Table::new(own_rows(table).map(row_from_element).collect()))
            .collect();
        Self::new(tables).with_body(render(html.root_element(), Scope::Body))
    }
}

/// Rows whose nearest enclosing table is `table` (nested tables excluded).
fn own_rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let table_id = table.id();
    table.select(&ROW_SELECTOR).filter(move |row| {
        row.ancestors()
            .find(|node| {
                node.value()
                    .as_element()
                    .is_some_and(|element| element.name() == "table")
            })
            .is_some_and(|node| node.id() == table_id)
    })
}

fn row_from_element(row: ElementRef<'_>) -> Row {
    let cells = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter_map(|cell| {
            let kind = match cell.value().name() {
                "th" => CellKind::Header,
                "td" => CellKind::Data,
                _ => return None,
            };
            Some(Cell {
                text: rendered_text(cell),
                kind,
            })
        })
        .collect();
    Row::new(cells)
}

/// Rendered text of a cell element: one trimmed line per visual line.
pub fn rendered_text(element: ElementRef<'_>) -> String {
    render(element, Scope::Cell)
}

fn render(element: ElementRef<'_>, scope: Scope) -> String {
    let mut raw = String::new();
    render_into(element, scope, &mut raw);
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_into(element: ElementRef<'_>, scope: Scope, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            push_collapsed(out, text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();
        if name == "br" {
            out.push('\n');
            continue;
        }
        if SKIPPED_ELEMENTS.contains(&name) {
            continue;
        }
        if scope == Scope::Cell && name == "table" {
            out.push('\n');
            continue;
        }
        let block = BLOCK_ELEMENTS.contains(&name)
            || (scope == Scope::Body && matches!(name, "td" | "th"));
        if block {
            out.push('\n');
        }
        render_into(child, scope, out);
        if block {
            out.push('\n');
        }
    }
}

fn push_collapsed(out: &mut String, text: &str) {
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() && !out.ends_with([' ', '\n']) {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    if pending_space && !out.is_empty() && !out.ends_with([' ', '\n']) {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_rows_and_cells() {
        let doc = Document::from_html(
            "<table><tr><th>ROOM</th><th>PATIENT</th></tr><tr><td>512</td><td>J. Doe</td></tr></table>\
             <p>between</p>\
             <table><tr><td>Float</td></tr></table>",
        );
        assert_eq!(doc.tables.len(), 2);
        let header = &doc.tables[0].rows[0];
        assert_eq!(header.cells[0], Cell::header("ROOM"));
        assert_eq!(doc.tables[0].rows[1].cells[1], Cell::data("J. Doe"));
        assert_eq!(doc.tables[1].rows[0].text(), "Float");
    }

    #[test]
    fn test_line_breaks_are_rendered() {
        let doc = Document::from_html(
            "<table><tr><td>FLOATS<br>  Ann   Lee <br/><p>Bo</p><div>Cy</div></td></tr></table>",
        );
        assert_eq!(doc.tables[0].rows[0].cells[0].text, "FLOATS\nAnn Lee\nBo\nCy");
    }

    #[test]
    fn test_source_newlines_collapse_to_spaces() {
        let doc = Document::from_html("<table><tr><td>RN\n   DAYS</td></tr></table>");
        assert_eq!(doc.tables[0].rows[0].cells[0].text, "RN DAYS");
    }

    #[test]
    fn test_nested_table_rows_are_not_duplicated() {
        let doc = Document::from_html(
            "<table><tr><td>outer<table><tr><td>inner</td></tr></table></td></tr></table>",
        );
        assert_eq!(doc.tables.len(), 2);
        assert_eq!(doc.tables[0].rows.len(), 1);
        assert_eq!(doc.tables[1].rows.len(), 1);
        assert_eq!(doc.tables[1].rows[0].cells[0].text, "inner");
    }

    #[test]
    fn test_nested_table_text_stays_out_of_outer_cell() {
        let doc = Document::from_html(
            "<table><tr><td>outer<br>Ann<table><tr><td>inner</td></tr></table>Bo</td></tr></table>",
        );
        assert_eq!(doc.tables[0].rows[0].cells[0].text, "outer\nAnn\nBo");
        assert_eq!(doc.text(), "outer\nAnn\ninner\nBo");
    }

    #[test]
    fn test_body_keeps_text_outside_tables() {
        let doc = Document::from_html(
            "<html><head><title>ignored</title></head><body>\
             <h1>5 EAST</h1><p>Friday, April 4th, 2025</p>\
             <table><tr><td>Fri</td><td>4/4/2025</td></tr></table></body></html>",
        );
        assert_eq!(doc.body, "5 EAST\nFriday, April 4th, 2025\nFri\n4/4/2025");
    }

    #[test]
    fn test_markup_without_tables() {
        let doc = Document::from_html("<p>Friday, April 4th, 2025</p>");
        assert!(doc.tables.is_empty());
        assert_eq!(doc.text(), "Friday, April 4th, 2025");
    }
}
