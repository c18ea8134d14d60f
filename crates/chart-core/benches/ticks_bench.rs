use chart_core::grid::nice_ticks;
use chart_core::ValueFormat;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_ticks(c: &mut Criterion) {
    let fmt = ValueFormat::currency_thousands(0);
    c.bench_function("nice_ticks_and_format", |b| {
        b.iter(|| {
            let labels: Vec<String> = nice_ticks(black_box(110.0), black_box(135.0), 6)
                .into_iter()
                .map(|v| fmt.format(v))
                .collect();
            black_box(labels)
        })
    });
}

criterion_group!(benches, bench_ticks);
criterion_main!(benches);
