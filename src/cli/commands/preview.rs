//! `preview` command handler.
//!
//! Runs an annotation pass on a parsed copy of the document and reports
//! what each matched row would receive. Nothing is written.

use super::{build_annotator, load_data, read_document};
use crate::annotator::{AnnotationReport, RowAnnotation, RowStatus};
use crate::cli::args::{OutputFormat, PreviewArgs};
use crate::config::Limits;
use crate::document::HtmlDocument;
use crate::error::AnnotatorError;

/// Execute `preview`.
///
/// # Errors
///
/// Returns an error if the data or document cannot be read or the
/// selector is invalid.
pub fn run(args: &PreviewArgs) -> Result<(), AnnotatorError> {
    let options = &args.options;
    let limits = Limits::default();
    let data = load_data(options, &limits)?;
    let source = read_document(&options.input, &limits)?;

    let mut document = HtmlDocument::parse(&source);
    let report = build_annotator(&data, options).annotate(&mut document)?;

    match args.format {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Human-readable report: one line per row, then a totals line.
fn render_human(report: &AnnotationReport) -> String {
    let mut out = String::new();
    for row in &report.rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} row(s) matched: {} annotated, {} unresolved, {} skipped\n",
        report.rows.len(),
        report.count(RowStatus::Annotated),
        report.count(RowStatus::Unresolved),
        report.count(RowStatus::Skipped),
    ));
    out
}

fn render_row(row: &RowAnnotation) -> String {
    let page = if row.page.is_empty() {
        "(no link)"
    } else {
        row.page.as_str()
    };
    let status = match row.status {
        RowStatus::Annotated => "annotated",
        RowStatus::Unresolved => "unresolved",
        RowStatus::Skipped => "skipped",
    };

    let mut line = format!("{:>3}  {page}  [{status}]  \"{}\"", row.index, row.summary);
    if !row.missing_codes.is_empty() {
        line.push_str(&format!("  missing: {}", row.missing_codes.join(", ")));
    }
    if let Some(suggestion) = &row.suggestion {
        line.push_str(&format!("  (did you mean '{suggestion}'?)"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, page: &str, summary: &str, status: RowStatus) -> RowAnnotation {
        RowAnnotation {
            index,
            page: page.to_string(),
            summary: summary.to_string(),
            status,
            missing_codes: Vec::new(),
            suggestion: None,
        }
    }

    #[test]
    fn human_report_lines() {
        let mut unresolved = row(2, "Intor", "", RowStatus::Unresolved);
        unresolved.suggestion = Some("Intro".to_string());

        let report = AnnotationReport {
            available: true,
            rows: vec![
                row(0, "", "", RowStatus::Unresolved),
                row(1, "Intro", "Written / Oral", RowStatus::Annotated),
                unresolved,
            ],
            bold_row: Some(0),
        };

        let text = render_human(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  0  (no link)  [unresolved]  \"\"");
        assert_eq!(lines[1], "  1  Intro  [annotated]  \"Written / Oral\"");
        assert_eq!(
            lines[2],
            "  2  Intor  [unresolved]  \"\"  (did you mean 'Intro'?)"
        );
        assert_eq!(
            lines[3],
            "3 row(s) matched: 1 annotated, 2 unresolved, 0 skipped"
        );
    }

    #[test]
    fn human_report_missing_codes() {
        let mut broken = row(0, "Broken", "Oral", RowStatus::Annotated);
        broken.missing_codes = vec!["zz".to_string()];
        assert_eq!(
            render_row(&broken),
            "  0  Broken  [annotated]  \"Oral\"  missing: zz"
        );
    }

    #[test]
    fn empty_report() {
        let text = render_human(&AnnotationReport::default());
        assert_eq!(text, "0 row(s) matched: 0 annotated, 0 unresolved, 0 skipped\n");
    }
}
