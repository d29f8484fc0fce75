//! Random scalar sampling for key generation in tests and demos.

use ark_bn254::Fr;
use ark_std::UniformRand;
use rand::Rng;

/// Samples a uniformly random scalar.
pub fn fr_random<R: Rng + ?Sized>(rng: &mut R) -> Fr {
    Fr::rand(rng)
}
