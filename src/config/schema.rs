//! Competency data schema
//!
//! The two read-only lookup tables the annotator works from. Both are
//! deserialized from YAML, JSON, or the object literal of a script file.

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Competency data: category labels and the page-to-codes map.
///
/// Map order follows the source file so previews are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompetencyData {
    /// Category code to display label (e.g. `wr` -> `Written`).
    #[serde(default)]
    pub categories: IndexMap<String, String>,

    /// Page identifier to ordered category codes.
    #[serde(default)]
    pub competency_map: IndexMap<String, Vec<String>>,
}

impl CompetencyData {
    /// Builds competency data from in-memory pairs.
    pub fn new<C, M, K, V, P, L>(categories: C, competency_map: M) -> Self
    where
        C: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        M: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            categories: categories
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            competency_map: competency_map
                .into_iter()
                .map(|(page, codes)| (page.into(), codes.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Codes for a page, in map order. Unknown pages yield an empty slice.
    #[must_use]
    pub fn codes_for(&self, page: &str) -> &[String] {
        self.competency_map
            .get(page)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Display label for a category code.
    #[must_use]
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.categories.get(code).map(String::as_str)
    }

    /// Suggest a known page identifier close to `page`.
    ///
    /// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
    #[must_use]
    pub fn suggest_page(&self, page: &str) -> Option<&str> {
        self.competency_map
            .keys()
            .map(|known| (known.as_str(), strsim::damerau_levenshtein(page, known)))
            .filter(|(_, dist)| *dist <= 3)
            .min_by_key(|(_, dist)| *dist)
            .map(|(known, _)| known)
    }
}

/// What to render for a code that has no entry in the category map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MissingCategory {
    /// Keep the segment as an empty string between separators.
    #[default]
    Empty,
    /// Drop the segment entirely.
    Omit,
}
