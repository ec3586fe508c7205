//! `annotate` command handler.
//!
//! Loads competency data, annotates the HTML document, and writes the
//! result to stdout, `--output`, or back over the input.
//!
//! When no row matches, the input bytes are passed through as read: the
//! serializer would otherwise normalize markup and wrap fragments. An
//! `--in-place` target is not rewritten at all in that case.

use std::io::Write;

use tracing::info;

use super::{build_annotator, is_stdin, load_data, read_document, with_path};
use crate::annotator::RowStatus;
use crate::cli::args::AnnotateArgs;
use crate::config::Limits;
use crate::document::HtmlDocument;
use crate::error::AnnotatorError;

/// Execute `annotate`.
///
/// # Errors
///
/// Returns an error if the data or document cannot be read, the selector
/// is invalid, or the output cannot be written.
pub fn run(args: &AnnotateArgs) -> Result<(), AnnotatorError> {
    let options = &args.options;
    if args.in_place && is_stdin(&options.input) {
        return Err(AnnotatorError::Usage(
            "--in-place needs an input file, not stdin".to_string(),
        ));
    }

    let limits = Limits::default();
    let data = load_data(options, &limits)?;
    let source = read_document(&options.input, &limits)?;

    let mut document = HtmlDocument::parse(&source);
    let report = build_annotator(&data, options).annotate(&mut document)?;

    let unchanged = report.rows.is_empty();
    if unchanged && args.in_place {
        info!(path = %options.input.display(), "no rows matched, input left as is");
        return Ok(());
    }
    let html = if unchanged {
        source
    } else {
        document.to_html()?
    };

    let target = if args.in_place {
        Some(&options.input)
    } else {
        args.output.as_ref()
    };

    match target {
        Some(path) => {
            std::fs::write(path, html).map_err(|e| with_path(e, "write", path))?;
            info!(path = %path.display(), "annotated document written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    info!(
        inserted = report.inserted(),
        unresolved = report.count(RowStatus::Unresolved),
        "annotate finished"
    );

    Ok(())
}
