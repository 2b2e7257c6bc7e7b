//! A `ChaCha8`-backed random number generator.
//!
//! This is a thin adapter over [`rand_chacha::ChaCha8Rng`], included so the
//! shuffle drivers can be exercised against a counter-mode stream cipher
//! generator, per the design notes' remark that a dramatically slower RNG
//! will dominate runtime and weaken the benefit of batching. The crate does
//! not reimplement ChaCha8 itself; that algorithm is squarely out of scope
//! here and is the business of `rand_chacha`.

use rand_core::{RngCore, SeedableRng};

use super::Rng64;

/// A random number generator backed by the ChaCha8 stream cipher.
#[derive(Clone)]
pub struct ChaCha8Rng {
  inner: rand_chacha::ChaCha8Rng,
}

impl ChaCha8Rng {
  /// Creates a generator whose stream is derived by hashing the given `u64`
  /// seed.
  #[inline]
  pub fn seed(seed: u64) -> Self {
    Self { inner: rand_chacha::ChaCha8Rng::seed_from_u64(seed) }
  }

  /// Creates a generator from a full 32-byte ChaCha key.
  #[inline(always)]
  pub fn from_seed_bytes(seed: [u8; 32]) -> Self {
    Self { inner: rand_chacha::ChaCha8Rng::from_seed(seed) }
  }

  /// Creates a generator seeded from the operating system's entropy source.
  #[cfg(feature = "getrandom")]
  #[inline(never)]
  #[cold]
  pub fn from_operating_system() -> Self {
    let mut seed = [0u8; 32];
    getrandom::fill(&mut seed).expect("getrandom::fill failed!");
    Self::from_seed_bytes(seed)
  }

  /// Draws the next `u64` from the generator.
  #[inline(always)]
  pub fn next_u64(&mut self) -> u64 {
    self.inner.next_u64()
  }
}

impl Rng64 for ChaCha8Rng {
  #[inline(always)]
  fn next_u64(&mut self) -> u64 {
    ChaCha8Rng::next_u64(self)
  }
}
