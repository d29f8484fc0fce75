use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{g1_generator, g2_generator, pairing_product_is_identity, CurveGroup, Fr};

fn bench_pairing_product_pair(c: &mut Criterion) {
    let a = (g1_generator() * Fr::from(7u64)).into_affine();
    let g2 = g2_generator().into_affine();

    c.bench_function("pairing_product_2", |bencher| {
        bencher.iter(|| {
            let ok = pairing_product_is_identity(black_box(vec![a, -a]), black_box(vec![g2, g2]));
            black_box(ok);
        })
    });
}

fn bench_pairing_product_batch(c: &mut Criterion) {
    let g2 = g2_generator().into_affine();
    let g1_terms: Vec<_> = (1..=8u64)
        .map(|i| (g1_generator() * Fr::from(i)).into_affine())
        .collect();
    let g2_terms = vec![g2; g1_terms.len()];

    c.bench_function("pairing_product_8", |bencher| {
        bencher.iter(|| {
            let ok = pairing_product_is_identity(
                black_box(g1_terms.clone()),
                black_box(g2_terms.clone()),
            );
            black_box(ok);
        })
    });
}

criterion_group!(benches, bench_pairing_product_pair, bench_pairing_product_batch);
criterion_main!(benches);
