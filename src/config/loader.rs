//! Competency data loader
//!
//! Loading pipeline:
//! 1. Size check against [`Limits`]
//! 2. Read raw file content, strip UTF-8 BOM
//! 3. Pick a format from the file extension
//! 4. For script files, cut the object literal out of the
//!    `competencies = {...}` assignment
//! 5. Deserialize to [`CompetencyData`]

use crate::config::schema::CompetencyData;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};
use tracing::debug;

/// Identifier whose assignment holds the data in script files.
const ASSIGNMENT_TARGET: &str = "competencies";

// ============================================================================
// Public API
// ============================================================================

/// Size limits for inputs, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum competency data file size in bytes.
    pub max_data_size: usize,

    /// Maximum HTML document size in bytes.
    pub max_document_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_data_size: env_or("COMPETENCY_ANNOTATOR_MAX_DATA_SIZE", 10 * 1024 * 1024),
            max_document_size: env_or("COMPETENCY_ANNOTATOR_MAX_DOCUMENT_SIZE", 50 * 1024 * 1024),
        }
    }
}

/// Serialized form of a competency data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// YAML document (also accepts JSON, which is a subset).
    Yaml,
    /// JSON document.
    Json,
    /// Script with a `competencies = {...}` global assignment.
    Script,
}

impl DataFormat {
    /// Picks a format from a file extension. Unknown extensions fall back to YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("js" | "mjs") => Self::Script,
            _ => Self::Yaml,
        }
    }
}

/// Competency data loader.
#[derive(Debug, Default)]
pub struct DataLoader {
    limits: Limits,
}

impl DataLoader {
    /// Creates a loader with the given limits.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Creates a loader with limits taken from the environment.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Loads competency data from a file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, too large, or does not
    /// parse in the format its extension implies.
    pub fn load(&self, path: &Path) -> Result<CompetencyData, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let file_size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if file_size > self.limits.max_data_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{file_size} bytes"),
                expected: format!("at most {} bytes", self.limits.max_data_size),
            });
        }

        let raw_content = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;

        let format = DataFormat::from_path(path);
        debug!(path = %path.display(), ?format, bytes = file_size, "loading competency data");

        let data = self.load_from_str(&raw_content, format, path)?;
        debug!(
            categories = data.categories.len(),
            pages = data.competency_map.len(),
            "competency data loaded"
        );
        Ok(data)
    }

    /// Parses competency data from a string.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the content does not parse, or
    /// `ConfigError::MissingAssignment` if a script has no data assignment.
    pub fn load_from_str(
        &self,
        content: &str,
        format: DataFormat,
        origin: &Path,
    ) -> Result<CompetencyData, ConfigError> {
        if content.len() > self.limits.max_data_size {
            return Err(ConfigError::InvalidValue {
                field: "content_size".to_string(),
                value: format!("{} bytes", content.len()),
                expected: format!("at most {} bytes", self.limits.max_data_size),
            });
        }

        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        match format {
            DataFormat::Json => serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
                path: origin.to_path_buf(),
                line: Some(e.line()),
                message: e.to_string(),
            }),
            DataFormat::Yaml => parse_yaml(content, origin),
            DataFormat::Script => {
                let literal =
                    extract_assignment(content).ok_or_else(|| ConfigError::MissingAssignment {
                        path: origin.to_path_buf(),
                    })?;
                // Object literals with unquoted keys are valid YAML flow mappings.
                parse_yaml(literal, origin)
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_yaml(content: &str, origin: &Path) -> Result<CompetencyData, ConfigError> {
    if content.trim().is_empty() {
        return Ok(CompetencyData::default());
    }
    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: PathBuf::from(origin),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

/// Finds `competencies = { ... }` and returns the balanced object literal.
///
/// Accepts `var`/`let`/`const` declarations and property targets such as
/// `window.competencies`. Braces inside string literals are ignored.
fn extract_assignment(source: &str) -> Option<&str> {
    for (idx, _) in source.match_indices(ASSIGNMENT_TARGET) {
        let preceded_by_ident = source[..idx]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if preceded_by_ident {
            continue;
        }

        let rest = source[idx + ASSIGNMENT_TARGET.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        if rest.starts_with('=') {
            continue;
        }
        let rest = rest.trim_start();
        if !rest.starts_with('{') {
            continue;
        }
        if let Some(end) = balanced_object_end(rest) {
            return Some(&rest[..end]);
        }
    }
    None
}

/// Byte offset just past the `}` closing the object that opens `text`.
fn balanced_object_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' | '`' => quote = Some(c),
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Reads an environment variable and parses it, falling back to a default.
fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Tests
// ============================================================================
