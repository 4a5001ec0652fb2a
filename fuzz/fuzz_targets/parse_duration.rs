#![no_main]

// Any literal that parses must render and re-parse to the same whole-minute span.

use libfuzzer_sys::fuzz_target;
use step_tracker::duration::{format_duration, parse_duration};

fuzz_target!(|literal: &str| {
    if let Ok(duration) = parse_duration(literal) {
        let rendered = format_duration(duration);
        let reparsed = parse_duration(&rendered).expect("rendered duration must parse");
        assert_eq!(reparsed.as_secs(), duration.as_secs() / 60 * 60);
    }
});
