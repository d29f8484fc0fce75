//! Signs a message digest with each provided private key, aggregates the
//! signatures, self-verifies, and prints the calldata hex for the on-chain
//! pairing-check verifier on stdout.

use std::process::ExitCode;

use bls::{aggregate, hash_to_point, verify, SigningKey};
use clap::Parser;
use num_bigint::BigUint;

#[derive(Parser)]
#[command(name = "aggregate", version, about = "BN254 BLS aggregate-signature calldata generator")]
struct Args {
    /// Message digest, `0x`-prefixed hex or decimal.
    #[arg(
        long,
        value_parser = parse_digest,
        default_value = "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
    )]
    digest: BigUint,

    /// Private keys as big-endian hex scalars, one per signer.
    #[arg(required = true)]
    keys: Vec<String>,
}

fn parse_digest(text: &str) -> Result<BigUint, String> {
    let trimmed = text.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
        None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
    };
    parsed.ok_or_else(|| format!("`{trimmed}` is not a hex or decimal digest"))
}

fn run(args: &Args) -> Result<String, String> {
    let hm = hash_to_point(&args.digest);

    let mut signatures = Vec::with_capacity(args.keys.len());
    let mut public_keys = Vec::with_capacity(args.keys.len());
    for (index, key_hex) in args.keys.iter().enumerate() {
        let key =
            SigningKey::from_hex(key_hex).map_err(|err| format!("signer {index}: {err}"))?;
        signatures.push(key.sign(&hm));
        public_keys.push(key.public_key());
    }

    let agg = aggregate(&signatures).map_err(|err| err.to_string())?;
    if !verify(&agg, &public_keys, &hm).map_err(|err| err.to_string())? {
        return Err("aggregate signature failed self-verification".into());
    }

    Ok(bls::calldata::encode_hex(&agg, &public_keys, &hm))
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(calldata_hex) => {
            print!("{calldata_hex}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
