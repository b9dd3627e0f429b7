use criterion::*;

fn bench_md5(c: &mut Criterion) {
    for size in [16usize, 64, 256, 1024, 8192] {
        let data = vec![0u8; size];

        c.bench_function(&format!("md5 hash {}", size), |b| {
            b.iter(|| {
                black_box(seedpass::crypto::hash::md5::compute(&data));
            })
        });
        c.bench_function(&format!("crate md5 hash {}", size), |b| {
            b.iter(|| {
                black_box(md5::compute(&data));
            })
        });
    }
}

criterion_group!(benches, bench_md5);
criterion_main!(benches);
