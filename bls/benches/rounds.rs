use bls::{aggregate, hash_to_point, verify, SigningKey};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;

const TEST_KEYS: [&str; 3] = [
    "189b092782fb8eec32783ddcbf9da2f9fb57c76c3a72ec77adc83d559b1671c5",
    "2bd823d324a317aeba80adc25961777699e93dc004ca0f9d872b460d61929829",
    "0706ea366edc43dacbca11b6083d36890f3150ecaa02f12eec40fe8e3d1f5502",
];

fn default_digest() -> BigUint {
    BigUint::parse_bytes(
        b"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        16,
    )
    .expect("digest")
}

fn bench_sign(c: &mut Criterion) {
    let hm = hash_to_point(&default_digest());
    let key = SigningKey::from_hex(TEST_KEYS[0]).expect("key");

    c.bench_function("bls_sign", |bencher| {
        bencher.iter(|| {
            let signature = key.sign(black_box(&hm));
            black_box(signature);
        })
    });
}

fn bench_aggregate(c: &mut Criterion) {
    let hm = hash_to_point(&default_digest());
    let signatures: Vec<_> = TEST_KEYS
        .iter()
        .map(|hex_key| SigningKey::from_hex(hex_key).expect("key").sign(&hm))
        .collect();

    c.bench_function("bls_aggregate_3", |bencher| {
        bencher.iter(|| {
            let agg = aggregate(black_box(&signatures)).expect("aggregate");
            black_box(agg);
        })
    });
}

fn bench_verify(c: &mut Criterion) {
    let hm = hash_to_point(&default_digest());
    let keys: Vec<_> = TEST_KEYS
        .iter()
        .map(|hex_key| SigningKey::from_hex(hex_key).expect("key"))
        .collect();
    let signatures: Vec<_> = keys.iter().map(|key| key.sign(&hm)).collect();
    let public_keys: Vec<_> = keys.iter().map(|key| key.public_key()).collect();
    let agg = aggregate(&signatures).expect("aggregate");

    c.bench_function("bls_verify_3", |bencher| {
        bencher.iter(|| {
            let ok = verify(black_box(&agg), black_box(&public_keys), black_box(&hm))
                .expect("verify");
            black_box(ok);
        })
    });
}

fn bench_encode_calldata(c: &mut Criterion) {
    let hm = hash_to_point(&default_digest());
    let keys: Vec<_> = TEST_KEYS
        .iter()
        .map(|hex_key| SigningKey::from_hex(hex_key).expect("key"))
        .collect();
    let signatures: Vec<_> = keys.iter().map(|key| key.sign(&hm)).collect();
    let public_keys: Vec<_> = keys.iter().map(|key| key.public_key()).collect();
    let agg = aggregate(&signatures).expect("aggregate");

    c.bench_function("bls_encode_calldata_3", |bencher| {
        bencher.iter(|| {
            let calldata =
                bls::calldata::encode(black_box(&agg), black_box(&public_keys), black_box(&hm));
            black_box(calldata);
        })
    });
}

criterion_group!(
    benches,
    bench_sign,
    bench_aggregate,
    bench_verify,
    bench_encode_calldata
);
criterion_main!(benches);
