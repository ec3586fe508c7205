//! Document query capability.
//!
//! The annotator never touches a DOM directly. It asks a [`DocumentQuery`]
//! for the rows matching a selector and drives each row through the typed
//! [`TableRow`] interface. Three implementations ship with the crate:
//!
//! - [`HtmlDocument`]: a parsed HTML tree (`kuchikiki`)
//! - [`MemoryDocument`]: plain typed rows, useful without any DOM
//! - [`NullDocument`]: the capability is absent; every pass is a no-op

pub mod html;
pub mod memory;

pub use html::{HtmlDocument, HtmlRow};
pub use memory::{Cell, Link, MemoryDocument, Row};

use crate::error::DocumentError;

/// Row path used when no selector is configured: rows of a table body
/// inside a quoted block.
pub const DEFAULT_ROW_SELECTOR: &str = "blockquote > table > tbody tr";

/// One table row, as seen by the annotator.
pub trait TableRow {
    /// Visible text of each anchor that is a direct child of a cell, in
    /// document order. Untrimmed.
    fn link_texts(&self) -> Vec<String>;

    /// Number of cells in the row.
    fn cell_count(&self) -> usize;

    /// Removes an explicit `width` from the first cell that directly
    /// follows a sibling cell, if there is one.
    fn clear_second_cell_width(&mut self);

    /// Inserts a new cell holding `text` immediately before the last cell.
    /// Rows without cells are left untouched.
    fn insert_before_last_cell(&mut self, text: &str);

    /// Applies bold font weight to the whole row.
    fn set_bold(&mut self);
}

impl<T: TableRow + ?Sized> TableRow for &mut T {
    fn link_texts(&self) -> Vec<String> {
        (**self).link_texts()
    }

    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }

    fn clear_second_cell_width(&mut self) {
        (**self).clear_second_cell_width();
    }

    fn insert_before_last_cell(&mut self, text: &str) {
        (**self).insert_before_last_cell(text);
    }

    fn set_bold(&mut self) {
        (**self).set_bold();
    }
}

/// A document that can be queried for table rows.
pub trait DocumentQuery {
    /// Row handle yielded by [`DocumentQuery::rows`].
    type Row<'a>: TableRow
    where
        Self: 'a;

    /// Whether the query capability exists at all. When `false` the
    /// annotator skips the document entirely.
    fn is_available(&self) -> bool {
        true
    }

    /// Rows matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidSelector` if the selector cannot be
    /// parsed by this implementation.
    fn rows(&mut self, selector: &str) -> Result<Vec<Self::Row<'_>>, DocumentError>;
}

/// Stand-in used when no document query capability is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDocument;

/// Uninhabited row type for [`NullDocument`].
#[derive(Debug)]
pub enum NoRow {}

impl TableRow for NoRow {
    fn link_texts(&self) -> Vec<String> {
        match *self {}
    }

    fn cell_count(&self) -> usize {
        match *self {}
    }

    fn clear_second_cell_width(&mut self) {
        match *self {}
    }

    fn insert_before_last_cell(&mut self, _text: &str) {
        match *self {}
    }

    fn set_bold(&mut self) {
        match *self {}
    }
}

impl DocumentQuery for NullDocument {
    type Row<'a> = NoRow;

    fn is_available(&self) -> bool {
        false
    }

    fn rows(&mut self, _selector: &str) -> Result<Vec<NoRow>, DocumentError> {
        Ok(Vec::new())
    }
}

/// Sets `property: value` in an inline style declaration list, replacing
/// any existing declaration of the same property.
#[must_use]
pub fn merge_style(existing: Option<&str>, property: &str, value: &str) -> String {
    let mut declarations: Vec<String> = existing
        .unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            decl.split_once(':')
                .is_none_or(|(name, _)| !name.trim().eq_ignore_ascii_case(property))
        })
        .map(str::to_string)
        .collect();

    declarations.push(format!("{property}: {value}"));
    declarations.join("; ")
}
