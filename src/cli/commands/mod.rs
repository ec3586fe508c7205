//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod annotate;
pub mod completions;
pub mod preview;
pub mod version;

use std::io::Read;
use std::path::Path;

use crate::annotator::Annotator;
use crate::cli::args::{AnnotationOptions, Cli, Commands, STDIN_PATH};
use crate::config::{CompetencyData, DataLoader, Limits};
use crate::error::{AnnotatorError, DocumentError};

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), AnnotatorError> {
    match cli.command {
        Commands::Annotate(args) => annotate::run(&args),
        Commands::Preview(args) => preview::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Whether `path` names stdin.
fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Load competency data named by the options.
fn load_data(options: &AnnotationOptions, limits: &Limits) -> Result<CompetencyData, AnnotatorError> {
    Ok(DataLoader::new(limits.clone()).load(&options.data)?)
}

/// Build an annotator from the options.
fn build_annotator<'d>(data: &'d CompetencyData, options: &AnnotationOptions) -> Annotator<'d> {
    Annotator::new(data)
        .with_selector(options.selector.as_str())
        .with_missing_category(options.missing_category)
}

/// Read the HTML document from a file or stdin, enforcing the size limit.
fn read_document(path: &Path, limits: &Limits) -> Result<String, AnnotatorError> {
    let source = if is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        let metadata = std::fs::metadata(path).map_err(|e| with_path(e, "read", path))?;
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        check_document_size(size, limits)?;
        std::fs::read_to_string(path).map_err(|e| with_path(e, "read", path))?
    };

    check_document_size(source.len(), limits)?;
    Ok(source)
}

fn check_document_size(size: usize, limits: &Limits) -> Result<(), DocumentError> {
    if size > limits.max_document_size {
        return Err(DocumentError::TooLarge {
            size,
            limit: limits.max_document_size,
        });
    }
    Ok(())
}

/// Attach the file path to an I/O error.
fn with_path(err: std::io::Error, action: &str, path: &Path) -> AnnotatorError {
    AnnotatorError::Io(std::io::Error::new(
        err.kind(),
        format!("failed to {action} {}: {err}", path.display()),
    ))
}
