#![no_main]

use competency_annotator::annotator::Annotator;
use competency_annotator::config::CompetencyData;
use competency_annotator::document::HtmlDocument;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(html) = std::str::from_utf8(data) {
        let competencies = CompetencyData::new(
            [("wr", "Written"), ("or", "Oral")],
            [("Intro", vec!["wr", "or", "zz"])],
        );

        let mut document = HtmlDocument::parse(html);
        let _ = Annotator::new(&competencies).annotate(&mut document);
        let _ = document.to_html();
    }
});
