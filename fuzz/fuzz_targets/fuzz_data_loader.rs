#![no_main]

use std::path::Path;

use competency_annotator::config::{DataFormat, DataLoader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let loader = DataLoader::with_defaults();

        // Only panics matter; parse errors are expected
        for format in [DataFormat::Yaml, DataFormat::Json, DataFormat::Script] {
            let _ = loader.load_from_str(text, format, Path::new("fuzz"));
        }
    }
});
