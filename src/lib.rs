//! `competency-annotator` - competency summaries for rendered tables
//!
//! Adds a column to the summary table of a rendered HTML document: each
//! row's page is looked up in a competency map, its codes are translated
//! to category labels, and the joined labels land in a new cell before the
//! row's last cell.
//!
//! ```
//! use competency_annotator::annotator::Annotator;
//! use competency_annotator::config::CompetencyData;
//! use competency_annotator::document::{Cell, Link, MemoryDocument, Row};
//!
//! let data = CompetencyData::new(
//!     [("wr", "Written"), ("or", "Oral")],
//!     [("Intro", vec!["wr", "or"])],
//! );
//! let mut doc = MemoryDocument::new(vec![Row::new(
//!     vec![Link::new("Intro")],
//!     vec![Cell::new("Intro"), Cell::new("Notes")],
//! )]);
//!
//! Annotator::new(&data).annotate(&mut doc).unwrap();
//! assert_eq!(doc.rows[0].texts(), ["Intro", "Written / Oral", "Notes"]);
//! ```

pub mod annotator;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod observability;
