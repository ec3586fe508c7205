//! Table annotator.
//!
//! One pass over the rows a [`DocumentQuery`] yields for the row selector.
//! For each row, in document order:
//!
//! 1. the page id is the trimmed text of the first link in a cell
//! 2. the second cell loses any explicit width
//! 3. the page's codes are rendered as labels joined by `" / "`
//! 4. a new cell holding the labels goes in right before the last cell
//!
//! After the pass, the first matched row is made bold. Unknown pages and
//! unknown codes degrade to empty output; nothing here fails on data.

pub mod labels;

pub use labels::{LABEL_SEPARATOR, RenderedLabels, render_labels};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::schema::{CompetencyData, MissingCategory};
use crate::document::{DEFAULT_ROW_SELECTOR, DocumentQuery, TableRow};
use crate::error::DocumentError;

/// What happened to a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Page found in the competency map; summary cell inserted.
    Annotated,
    /// Page not in the competency map; empty summary cell inserted.
    Unresolved,
    /// Row has no cells to anchor an insertion; left as is.
    Skipped,
}

/// Outcome for one matched row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowAnnotation {
    /// Position among matched rows.
    pub index: usize,
    /// Page identifier extracted from the row (may be empty).
    pub page: String,
    /// Text of the inserted cell.
    pub summary: String,
    /// Row outcome.
    pub status: RowStatus,
    /// Codes without a category label.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_codes: Vec<String>,
    /// Closest known page id, for unresolved rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Summary of one annotation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    /// Whether the document offered a query capability at all.
    pub available: bool,
    /// Per-row outcomes, in document order.
    pub rows: Vec<RowAnnotation>,
    /// Index of the row made bold, if any row matched.
    pub bold_row: Option<usize>,
}

impl AnnotationReport {
    /// Number of rows with the given status.
    #[must_use]
    pub fn count(&self, status: RowStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    /// Number of rows that received a new cell.
    #[must_use]
    pub fn inserted(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.status != RowStatus::Skipped)
            .count()
    }
}

/// Annotates summary tables using explicit competency data.
#[derive(Debug, Clone)]
pub struct Annotator<'d> {
    data: &'d CompetencyData,
    selector: String,
    missing_category: MissingCategory,
}

impl<'d> Annotator<'d> {
    /// Creates an annotator using [`DEFAULT_ROW_SELECTOR`] and the default
    /// missing-category policy.
    #[must_use]
    pub fn new(data: &'d CompetencyData) -> Self {
        Self {
            data,
            selector: DEFAULT_ROW_SELECTOR.to_string(),
            missing_category: MissingCategory::default(),
        }
    }

    /// Overrides the row selector.
    #[must_use]
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Overrides the policy for codes without a category label.
    #[must_use]
    pub const fn with_missing_category(mut self, missing_category: MissingCategory) -> Self {
        self.missing_category = missing_category;
        self
    }

    /// The row selector in use.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Page identifier of a row: the trimmed text of its first link, or
    /// empty if it has none.
    #[must_use]
    pub fn page_id<R: TableRow + ?Sized>(row: &R) -> String {
        row.link_texts()
            .first()
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }

    /// Renders the summary for a page id.
    #[must_use]
    pub fn summary_for(&self, page: &str) -> RenderedLabels {
        render_labels(self.data, self.data.codes_for(page), self.missing_category)
    }

    /// Runs one annotation pass over `document`.
    ///
    /// A document without query capability is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidSelector` if the selector is rejected.
    /// No mutation has happened in that case.
    pub fn annotate<D: DocumentQuery>(
        &self,
        document: &mut D,
    ) -> Result<AnnotationReport, DocumentError> {
        if !document.is_available() {
            debug!("document query capability unavailable, skipping");
            return Ok(AnnotationReport::default());
        }

        let mut rows = document.rows(&self.selector)?;
        debug!(selector = %self.selector, rows = rows.len(), "matched rows");

        let mut report = AnnotationReport {
            available: true,
            rows: Vec::with_capacity(rows.len()),
            bold_row: None,
        };

        for (index, row) in rows.iter_mut().enumerate() {
            report.rows.push(self.annotate_row(index, row));
        }

        if let Some(first) = rows.first_mut() {
            first.set_bold();
            report.bold_row = Some(0);
        }

        info!(
            matched = report.rows.len(),
            annotated = report.count(RowStatus::Annotated),
            unresolved = report.count(RowStatus::Unresolved),
            skipped = report.count(RowStatus::Skipped),
            "annotation pass complete"
        );

        Ok(report)
    }

    fn annotate_row<R: TableRow>(&self, index: usize, row: &mut R) -> RowAnnotation {
        let page = Self::page_id(&*row);
        row.clear_second_cell_width();

        if row.cell_count() == 0 {
            debug!(index, "row has no cells, skipping");
            return RowAnnotation {
                index,
                page,
                summary: String::new(),
                status: RowStatus::Skipped,
                missing_codes: Vec::new(),
                suggestion: None,
            };
        }

        let rendered = self.summary_for(&page);
        row.insert_before_last_cell(&rendered.text);

        for code in &rendered.missing {
            warn!(page = %page, code = %code, "category code has no label");
        }

        let known = self.data.competency_map.contains_key(&page);
        let suggestion = if known || page.is_empty() {
            None
        } else {
            self.data.suggest_page(&page).map(str::to_string)
        };

        if known {
            debug!(index, page = %page, summary = %rendered.text, "row annotated");
        } else {
            debug!(index, page = %page, ?suggestion, "page not in competency map");
        }

        RowAnnotation {
            index,
            page,
            summary: rendered.text,
            status: if known {
                RowStatus::Annotated
            } else {
                RowStatus::Unresolved
            },
            missing_codes: rendered.missing,
            suggestion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Cell, Link, MemoryDocument, NullDocument, Row};

    fn data() -> CompetencyData {
        CompetencyData::new(
            [("wr", "Written"), ("or", "Oral")],
            [("Intro", vec!["wr", "or"]), ("Broken", vec!["or", "zz"])],
        )
    }

    fn page_row(page: &str) -> Row {
        Row::new(
            vec![Link::new(page)],
            vec![
                Cell::new(page),
                Cell::new("title").with_width("50%"),
                Cell::new("last"),
            ],
        )
    }

    fn header_row() -> Row {
        Row::new(
            vec![],
            vec![Cell::new("Page"), Cell::new("Title"), Cell::new("Notes")],
        )
    }

    #[test]
    fn known_page_gets_joined_labels() {
        let data = data();
        let mut doc = MemoryDocument::new(vec![page_row("Intro")]);
        let report = Annotator::new(&data).annotate(&mut doc).unwrap();

        assert_eq!(doc.rows[0].texts(), ["Intro", "title", "Written / Oral", "last"]);
        assert_eq!(report.rows[0].status, RowStatus::Annotated);
        assert_eq!(report.rows[0].summary, "Written / Oral");
    }

    #[test]
    fn unknown_page_gets_empty_cell() {
        let data = data();
        let mut doc = MemoryDocument::new(vec![page_row("Unknown")]);
        let report = Annotator::new(&data).annotate(&mut doc).unwrap();

        assert_eq!(doc.rows[0].texts(), ["Unknown", "title", "", "last"]);
        assert_eq!(report.rows[0].status, RowStatus::Unresolved);
    }

    #[test]
    fn page_id_is_trimmed_first_link() {
        let row = Row::new(
            vec![Link::new("  Intro\n"), Link::new("Other")],
            vec![Cell::new("x")],
        );
        assert_eq!(Annotator::page_id(&row), "Intro");
    }

    #[test]
    fn page_id_without_link_is_empty() {
        assert_eq!(Annotator::page_id(&header_row()), "");
    }

    #[test]
    fn second_cell_width_removed() {
        let data = data();
        let mut doc = MemoryDocument::new(vec![page_row("Intro")]);
        Annotator::new(&data).annotate(&mut doc).unwrap();
        assert!(doc.rows[0].cells.iter().all(|c| c.width.is_none()));
    }

    #[test]
    fn only_first_row_is_bold() {
        let data = data();
        let mut doc =
            MemoryDocument::new(vec![header_row(), page_row("Intro"), page_row("Unknown")]);
        let report = Annotator::new(&data).annotate(&mut doc).unwrap();

        let bold: Vec<bool> = doc.rows.iter().map(|r| r.bold).collect();
        assert_eq!(bold, [true, false, false]);
        assert_eq!(report.bold_row, Some(0));
    }

    #[test]
    fn header_row_gets_empty_cell() {
        let data = data();
        let mut doc = MemoryDocument::new(vec![header_row()]);
        Annotator::new(&data).annotate(&mut doc).unwrap();
        assert_eq!(doc.rows[0].texts(), ["Page", "Title", "", "Notes"]);
    }

    #[test]
    fn zero_rows_is_noop() {
        let data = data();
        let mut doc = MemoryDocument::default();
        let report = Annotator::new(&data).annotate(&mut doc).unwrap();
        assert!(report.available);
        assert!(report.rows.is_empty());
        assert_eq!(report.bold_row, None);
    }

    #[test]
    fn null_document_is_noop() {
        let data = data();
        let report = Annotator::new(&data).annotate(&mut NullDocument).unwrap();
        assert!(!report.available);
        assert!(report.rows.is_empty());
    }

    #[test]
    fn row_without_cells_is_skipped_but_still_bold_first() {
        let data = data();
        let mut doc = MemoryDocument::new(vec![Row::default(), page_row("Intro")]);
        let report = Annotator::new(&data).annotate(&mut doc).unwrap();

        assert_eq!(report.rows[0].status, RowStatus::Skipped);
        assert!(doc.rows[0].cells.is_empty());
        assert!(doc.rows[0].bold);
        assert_eq!(report.inserted(), 1);
    }

    #[test]
    fn missing_code_policy_applies() {
        let data = data();

        let mut empty = MemoryDocument::new(vec![page_row("Broken")]);
        let report = Annotator::new(&data).annotate(&mut empty).unwrap();
        assert_eq!(empty.rows[0].cells[2].text, "Oral / ");
        assert_eq!(report.rows[0].missing_codes, ["zz"]);

        let mut omit = MemoryDocument::new(vec![page_row("Broken")]);
        Annotator::new(&data)
            .with_missing_category(MissingCategory::Omit)
            .annotate(&mut omit)
            .unwrap();
        assert_eq!(omit.rows[0].cells[2].text, "Oral");
    }

    #[test]
    fn unresolved_row_carries_suggestion() {
        let data = data();
        let mut doc = MemoryDocument::new(vec![page_row("Intor")]);
        let report = Annotator::new(&data).annotate(&mut doc).unwrap();
        assert_eq!(report.rows[0].suggestion.as_deref(), Some("Intro"));
    }

    #[test]
    fn cell_count_grows_by_one() {
        let data = data();
        let mut doc = MemoryDocument::new(vec![page_row("Intro"), page_row("Unknown")]);
        let before: Vec<usize> = doc.rows.iter().map(|r| r.cells.len()).collect();
        Annotator::new(&data).annotate(&mut doc).unwrap();
        let after: Vec<usize> = doc.rows.iter().map(|r| r.cells.len()).collect();
        assert_eq!(after, before.iter().map(|n| n + 1).collect::<Vec<_>>());
    }

    #[test]
    fn custom_selector_is_kept() {
        let data = data();
        let annotator = Annotator::new(&data).with_selector("table tr");
        assert_eq!(annotator.selector(), "table tr");
    }
}
