use bls::{aggregate, hash_to_point, verify, PublicKey, Signature, SigningKey};
use num_bigint::BigUint;

const TEST_KEYS: [&str; 5] = [
    "189b092782fb8eec32783ddcbf9da2f9fb57c76c3a72ec77adc83d559b1671c5",
    "2bd823d324a317aeba80adc25961777699e93dc004ca0f9d872b460d61929829",
    "0706ea366edc43dacbca11b6083d36890f3150ecaa02f12eec40fe8e3d1f5502",
    "1e2b123a407d3796a85dd9e9d5f94a71e6dad9a0680433bd09b38dcb0a2c6a59",
    "17c6c390e5cbabb10f10a92b94a7b73b0fe99ca3cf8e68d00b3d9dca75581967",
];

fn main() {
    let digest = BigUint::parse_bytes(
        b"c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        16,
    )
    .expect("digest");
    let hm = hash_to_point(&digest);

    // Each signer publishes its signature and public key as JSON.
    let mut signature_json = Vec::new();
    let mut public_key_json = Vec::new();
    for key_hex in TEST_KEYS {
        let key = SigningKey::from_hex(key_hex).expect("key");
        signature_json.push(key.sign(&hm).to_json().expect("signature json"));
        public_key_json.push(key.public_key().to_json().expect("public key json"));
    }

    // The aggregator sees only the JSON exchange format.
    let signatures: Vec<Signature> = signature_json
        .iter()
        .map(|json| Signature::from_json(json).expect("signature"))
        .collect();
    let public_keys: Vec<PublicKey> = public_key_json
        .iter()
        .map(|json| PublicKey::from_json(json).expect("public key"))
        .collect();

    let agg = aggregate(&signatures).expect("aggregate");
    assert!(verify(&agg, &public_keys, &hm).expect("verify"));

    println!("{}", bls::calldata::encode_hex(&agg, &public_keys, &hm));
}
