//! In-memory document made of typed rows.
//!
//! Holds the rows a selector would have matched, so the selector itself is
//! not interpreted here.

use serde::{Deserialize, Serialize};

use crate::document::{DocumentQuery, TableRow};
use crate::error::DocumentError;

/// A link inside a row. Only its visible text matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible link text.
    pub text: String,
}

impl Link {
    /// Creates a link with the given visible text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell text.
    pub text: String,

    /// Explicit width, if the cell carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

impl Cell {
    /// Creates a cell without an explicit width.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: None,
        }
    }

    /// Sets an explicit width.
    #[must_use]
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }
}

/// A table row: its links and its cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Links found in the row's cells, in document order.
    #[serde(default)]
    pub links: Vec<Link>,

    /// Cells in document order.
    #[serde(default)]
    pub cells: Vec<Cell>,

    /// Whether bold font weight has been applied.
    #[serde(default)]
    pub bold: bool,
}

impl Row {
    /// Creates a row from links and cells.
    #[must_use]
    pub const fn new(links: Vec<Link>, cells: Vec<Cell>) -> Self {
        Self {
            links,
            cells,
            bold: false,
        }
    }

    /// Cell texts, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

impl TableRow for Row {
    fn link_texts(&self) -> Vec<String> {
        self.links.iter().map(|l| l.text.clone()).collect()
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn clear_second_cell_width(&mut self) {
        if let Some(cell) = self.cells.get_mut(1) {
            cell.width = None;
        }
    }

    fn insert_before_last_cell(&mut self, text: &str) {
        if let Some(last) = self.cells.len().checked_sub(1) {
            self.cells.insert(last, Cell::new(text));
        }
    }

    fn set_bold(&mut self) {
        self.bold = true;
    }
}

/// A document whose matched rows are held directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Matched rows in document order.
    pub rows: Vec<Row>,
}

impl MemoryDocument {
    /// Creates a document from rows.
    #[must_use]
    pub const fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl DocumentQuery for MemoryDocument {
    type Row<'a> = &'a mut Row;

    fn rows(&mut self, _selector: &str) -> Result<Vec<&mut Row>, DocumentError> {
        Ok(self.rows.iter_mut().collect())
    }
}
