//! Date normalizer throughput over a mixed-format token batch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricestory_core::dates::normalize;

fn bench_normalize(c: &mut Criterion) {
    let tokens = [
        "01/02/20",
        "12/31/24",
        "04-03-2020",
        "2020-03-04",
        "03/04/2020",
        "Mar 4, 2020",
        "4 Mar 2020",
        "not-a-date",
        "",
    ];

    c.bench_function("normalize_mixed_formats", |b| {
        b.iter(|| {
            for token in &tokens {
                let _ = normalize(black_box(token));
            }
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
