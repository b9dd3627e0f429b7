use criterion::*;
use seedpass::{derive, generate, Charsets};

fn bench_derive(c: &mut Criterion) {
    let buckets = Charsets::default().buckets();
    let seed = "example.com2024-01-01correct horse battery staple";

    c.bench_function("derive 5 buckets", |b| {
        b.iter(|| {
            black_box(derive(&buckets, seed).unwrap());
        })
    });

    c.bench_function("generate end to end", |b| {
        b.iter(|| {
            black_box(
                generate(
                    Charsets::default(),
                    "example.com",
                    "2024-01-01",
                    "correct horse battery staple",
                    16,
                )
                .unwrap(),
            );
        })
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
