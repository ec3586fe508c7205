//! Configuration module
//!
//! Handles loading of the competency data (category labels and the
//! page-to-codes map) and the size limits applied to inputs.

pub mod loader;
pub mod schema;

pub use loader::{DataFormat, DataLoader, Limits};
pub use schema::{CompetencyData, MissingCategory};
