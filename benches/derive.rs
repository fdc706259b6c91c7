//! Derivation benchmark: raw session record → model feature record.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use convpredict::features::{derive, month_number};
use convpredict::session::{SessionRecord, VisitorType};

fn make_session(month: &str) -> SessionRecord {
    SessionRecord {
        administrative_pages: 2,
        administrative_duration: 35.0,
        informational_pages: 1,
        informational_duration: 12.5,
        product_related_pages: 18,
        product_related_duration: 540.0,
        bounce_rate: 0.02,
        exit_rate: 0.04,
        page_value: 12.7,
        special_day_proximity: 0.4,
        month: month.to_string(),
        visitor_type: VisitorType::Returning,
        traffic_type: 2,
        region: 3,
        operating_system: 2,
        browser: 4,
        is_weekend: true,
    }
}

fn bench_derive(c: &mut Criterion) {
    c.bench_function("derive_full_record", |b| {
        b.iter(|| derive(black_box(make_session("Nov"))))
    });
}

fn bench_month_resolution(c: &mut Criterion) {
    let mut g = c.benchmark_group("month_number");
    for label in ["Nov", "June", "Monsoon"] {
        g.bench_function(label, |b| b.iter(|| month_number(black_box(label))));
    }
    g.finish();
}

fn bench_column_assembly(c: &mut Criterion) {
    let record = derive(make_session("June"));
    c.bench_function("columns_assembly", |b| b.iter(|| black_box(&record).columns()));
}

criterion_group!(benches, bench_derive, bench_month_resolution, bench_column_assembly);
criterion_main!(benches);
