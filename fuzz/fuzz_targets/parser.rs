#![no_main]

use libfuzzer_sys::fuzz_target;

use cvparse::parser::{ParseOptions, parse_text};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data).to_string();

    // The parser should never panic regardless of input
    let resume = parse_text(&text, &ParseOptions::default());
    let _ = serde_json::to_string(&resume);
});
