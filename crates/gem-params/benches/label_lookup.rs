use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gem_params::SourceType;

fn label_lookup_bench(c: &mut Criterion) {
    let labels: Vec<&str> = SourceType::iter().map(SourceType::label).collect();

    c.bench_function("from_label_hit", |b| {
        b.iter(|| {
            for label in &labels {
                black_box(SourceType::from_label(black_box(label)).unwrap());
            }
        });
    });

    c.bench_function("is_valid_miss", |b| {
        b.iter(|| black_box(SourceType::is_valid(black_box("Volcano Source"))));
    });
}

criterion_group!(benches, label_lookup_bench);
criterion_main!(benches);
