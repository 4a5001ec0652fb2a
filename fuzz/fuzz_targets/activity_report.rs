#![no_main]

// Report entry points must never panic, whatever the record and biometrics.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use step_tracker::report::{activity_report, walking_report};

#[derive(Arbitrary, Debug)]
struct ReportInput<'a> {
    raw: &'a str,
    weight: f64,
    height: f64,
}

fuzz_target!(|input: ReportInput<'_>| {
    let _ = walking_report(input.raw, input.weight, input.height);
    if let Ok(report) = activity_report(input.raw, input.weight, input.height) {
        assert_eq!(report.lines().count(), 5);
    }
});
