use criterion::{black_box, criterion_group, criterion_main, Criterion};
use step_tracker::duration::parse_duration;
use step_tracker::report::{activity_report, walking_report};

fn report_benchmarks(c: &mut Criterion) {
    c.bench_function("parse_duration", |b| {
        b.iter(|| parse_duration(black_box("12h45m")))
    });

    c.bench_function("walking_report", |b| {
        b.iter(|| walking_report(black_box("678,0h50m"), 75.0, 1.75))
    });

    c.bench_function("activity_report", |b| {
        b.iter(|| activity_report(black_box("3456,Бег,3h00m"), 75.0, 1.8))
    });
}

criterion_group!(benches, report_benchmarks);
criterion_main!(benches);
