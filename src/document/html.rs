//! HTML document backed by a `kuchikiki` tree.
//!
//! Parsing is lenient: any input produces a tree, and rows are whatever the
//! HTML5 tree builder made of it (including implied `<tbody>` elements).
//! Serialization emits a full document, so fragments come back wrapped in
//! `<html><head></head><body>`.

use kuchikiki::traits::TendrilSink;
use kuchikiki::{Attribute, ExpandedName, NodeRef};

use crate::document::{DocumentQuery, TableRow, merge_style};
use crate::error::DocumentError;

const CELL_SELECTOR: &str = "td";
const LINK_SELECTOR: &str = "td > a";
const SECOND_CELL_SELECTOR: &str = "td + td";

/// A parsed HTML document.
#[derive(Debug)]
pub struct HtmlDocument {
    root: NodeRef,
}

impl HtmlDocument {
    /// Parses an HTML document.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(html),
        }
    }

    /// Serializes the (possibly mutated) document back to HTML.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Serialize` if the serializer fails.
    pub fn to_html(&self) -> Result<String, DocumentError> {
        let mut buf = Vec::new();
        self.root.serialize(&mut buf).map_err(DocumentError::Serialize)?;
        String::from_utf8(buf).map_err(|e| {
            DocumentError::Serialize(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }
}

impl DocumentQuery for HtmlDocument {
    type Row<'a> = HtmlRow;

    fn rows(&mut self, selector: &str) -> Result<Vec<HtmlRow>, DocumentError> {
        let matches = self
            .root
            .select(selector)
            .map_err(|()| DocumentError::InvalidSelector(selector.to_string()))?;

        Ok(matches
            .map(|row| HtmlRow {
                node: row.as_node().clone(),
            })
            .collect())
    }
}

/// Handle to a `<tr>` element inside an [`HtmlDocument`].
#[derive(Debug, Clone)]
pub struct HtmlRow {
    node: NodeRef,
}

impl HtmlRow {
    fn cells(&self) -> Vec<NodeRef> {
        select_all(&self.node, CELL_SELECTOR)
    }
}

impl TableRow for HtmlRow {
    fn link_texts(&self) -> Vec<String> {
        select_all(&self.node, LINK_SELECTOR)
            .iter()
            .map(NodeRef::text_contents)
            .collect()
    }

    fn cell_count(&self) -> usize {
        self.cells().len()
    }

    fn clear_second_cell_width(&mut self) {
        let cells = select_all(&self.node, SECOND_CELL_SELECTOR);
        if let Some(element) = cells.first().and_then(|cell| cell.as_element()) {
            element.attributes.borrow_mut().remove("width");
        }
    }

    fn insert_before_last_cell(&mut self, text: &str) {
        let cells = self.cells();
        let Some(last) = cells.last() else {
            return;
        };
        let Some(last_element) = last.as_element() else {
            return;
        };

        let cell = NodeRef::new_element(
            last_element.name.clone(),
            std::iter::empty::<(ExpandedName, Attribute)>(),
        );
        if !text.is_empty() {
            cell.append(NodeRef::new_text(text));
        }
        last.insert_before(cell);
    }

    fn set_bold(&mut self) {
        if let Some(element) = self.node.as_element() {
            let mut attributes = element.attributes.borrow_mut();
            let style = merge_style(attributes.get("style"), "font-weight", "bold");
            attributes.insert("style", style);
        }
    }
}

/// Descendant elements of `node` matching a static selector.
fn select_all(node: &NodeRef, selector: &str) -> Vec<NodeRef> {
    node.select(selector)
        .map(|matches| matches.map(|m| m.as_node().clone()).collect())
        .unwrap_or_default()
}
