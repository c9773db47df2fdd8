use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId,
    Criterion,
};
use inversion::Inversion;
use pair_count::count_pairs;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Seq};

fn bench_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("inversion");

    let mut rng = ChaCha20Rng::from_seed([
        0x55, 0xEF, 0xE0, 0x3C, 0x71, 0xDA, 0xFC, 0xAB, 0x5C, 0x1A, 0x9F, 0xEB,
        0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A, 0xF5, 0x67,
        0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
    ]);

    for len in [100, 1000, 10000] {
        let a = Seq { bound: 0..1_000_000_000_i32, len }.generate(&mut rng);
        group
            .bench_with_input(BenchmarkId::new("merge", len), &a, |b, a| {
                b.iter_batched_ref(
                    || a.clone(),
                    |a| black_box(a.inversion()),
                    BatchSize::SmallInput,
                )
            })
            .bench_with_input(BenchmarkId::new("naive", len), &a, |b, a| {
                b.iter(|| black_box(count_pairs(a, |l, r| l > r)))
            });
    }

    group.finish();
}

criterion_group!(benches, bench_inversion);
criterion_main!(benches);
