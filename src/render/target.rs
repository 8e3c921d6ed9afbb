//! Render target abstraction
//!
//! Renderers never look up containers themselves; they are handed a
//! `RenderTarget` and address table bodies by id.

use std::collections::HashMap;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Plain text
    Text(String),
    /// Emphasized text (`<em>`)
    Emphasis(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn emphasis(value: impl Into<String>) -> Self {
        Cell::Emphasis(value.into())
    }

    /// Cell content without markup
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Emphasis(s) => s,
        }
    }
}

/// One table row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Cell contents without markup
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(Cell::as_str).collect()
    }
}

/// Container of table bodies the renderers write into
pub trait RenderTarget {
    /// Remove every row from the body `body_id`
    fn clear(&mut self, body_id: &str);

    /// Append a row to the body `body_id`
    fn append_row(&mut self, body_id: &str, row: Row);
}

/// Plain in-memory target: body id -> rows
#[derive(Debug, Clone, Default)]
pub struct TableBodies {
    bodies: HashMap<String, Vec<Row>>,
}

impl TableBodies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently held by `body_id` (empty if never written)
    pub fn rows(&self, body_id: &str) -> &[Row] {
        self.bodies.get(body_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RenderTarget for TableBodies {
    fn clear(&mut self, body_id: &str) {
        self.bodies.entry(body_id.to_string()).or_default().clear();
    }

    fn append_row(&mut self, body_id: &str, row: Row) {
        self.bodies.entry(body_id.to_string()).or_default().push(row);
    }
}
