//! Random number generation for pixel sampling.
//!
//! Every helper takes its random source explicitly. Rendering derives one
//! ChaCha20 stream per scanline from a single seed, so a fixed seed reproduces
//! the same image no matter how rows are scheduled across threads.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::vec3::Vec3;

/// Draw a fresh seed from the thread-local generator.
pub fn fresh_seed() -> u64 {
    rand::rng().random()
}

/// Generator dedicated to one scanline of a render seeded with `seed`.
pub fn scanline_rng(seed: u64, row: u32) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(u64::from(row));
    rng
}

/// Generate a random f64 in [0.0, 1.0)
pub fn random_f64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random()
}

/// Random offset in the [-0.5, 0.5) square, with z = 0.
pub fn sample_square<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(random_f64(rng) - 0.5, random_f64(rng) - 0.5, 0.0)
}
