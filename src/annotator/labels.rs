//! Rendering category codes as a label summary.

use crate::config::schema::{CompetencyData, MissingCategory};

/// Separator placed between labels in a summary cell.
pub const LABEL_SEPARATOR: &str = " / ";

/// Labels rendered for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedLabels {
    /// Summary text, labels joined by [`LABEL_SEPARATOR`].
    pub text: String,

    /// Codes that had no category label, in the order they were seen.
    pub missing: Vec<String>,
}

/// Renders `codes` as labels in the order given. Never sorts.
#[must_use]
pub fn render_labels(
    data: &CompetencyData,
    codes: &[String],
    missing_category: MissingCategory,
) -> RenderedLabels {
    let mut missing = Vec::new();
    let labels: Vec<&str> = codes
        .iter()
        .filter_map(|code| match data.label_for(code) {
            Some(label) => Some(label),
            None => {
                missing.push(code.clone());
                match missing_category {
                    MissingCategory::Omit => None,
                    MissingCategory::Empty => Some(""),
                }
            }
        })
        .collect();

    RenderedLabels {
        text: labels.join(LABEL_SEPARATOR),
        missing,
    }
}
