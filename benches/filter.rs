use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cybershield_dashboard::core::filter::{filter_logs, LevelFilter};
use cybershield_dashboard::core::Fixtures;

fn filter_benchmark(c: &mut Criterion) {
    let entries = Fixtures::seeded_at(Utc::now()).log_entries;

    c.bench_function("filter_logs_search_and_level", |b| {
        b.iter(|| {
            filter_logs(
                black_box(&entries),
                black_box("detected"),
                black_box(LevelFilter::parse("WARN")),
            )
        })
    });

    c.bench_function("filter_logs_identity", |b| {
        b.iter(|| filter_logs(black_box(&entries), black_box(""), LevelFilter::All))
    });
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
