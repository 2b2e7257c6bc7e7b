//! A 128-bit-state Lehmer (multiplicative congruential) generator.
//!
//! D. H. Lehmer, *Mathematical methods in large-scale computing units*,
//! Proceedings of a Second Symposium on Large Scale Digital Calculating
//! Machinery, Annals of the Computation Laboratory, Harvard Univ. 26 (1951).
//!
//! Each draw advances a 128-bit state by one multiplication and returns the
//! high 64 bits. State is held per-instance; there is no process-wide global,
//! unlike some reference implementations of this generator.

use super::splitmix64;
use super::Rng64;

const MULTIPLIER: u128 = 0xda94_2042_e4dd_58b5;

/// A Lehmer-128 random number generator.
#[derive(Clone)]
pub struct Lehmer128 {
  state: u128,
}

impl Lehmer128 {
  /// Creates a generator whose 128-bit state is derived by hashing the
  /// given `u64` seed with two independent applications of SplitMix64,
  /// matching the seeding procedure of the original reference
  /// implementation.
  #[inline]
  pub const fn seed(seed: u64) -> Self {
    let lo = splitmix64(seed);
    let hi = splitmix64(seed.wrapping_add(1));
    let state = (lo as u128) | ((hi as u128) << 64);
    Self { state }
  }

  /// Creates a generator with a particular initial 128-bit state.
  ///
  /// Unlike [`Lehmer128::seed`], this does not hash its argument. Prefer
  /// `seed` unless you have a specific reason to set the raw state
  /// directly.
  #[inline(always)]
  pub const fn from_state(state: u128) -> Self {
    Self { state }
  }

  /// Creates a generator seeded from the operating system's entropy source.
  #[cfg(feature = "getrandom")]
  #[inline(never)]
  #[cold]
  pub fn from_operating_system() -> Self {
    let mut buf = [0u8; 16];
    getrandom::fill(&mut buf).expect("getrandom::fill failed!");
    Self { state: u128::from_le_bytes(buf) }
  }

  /// Draws the next `u64` from the generator.
  #[inline(always)]
  pub fn next_u64(&mut self) -> u64 {
    self.state = self.state.wrapping_mul(MULTIPLIER);
    (self.state >> 64) as u64
  }
}

impl Rng64 for Lehmer128 {
  #[inline(always)]
  fn next_u64(&mut self) -> u64 {
    Lehmer128::next_u64(self)
  }
}

#[cfg(feature = "rand_core")]
impl rand_core::RngCore for Lehmer128 {
  #[inline(always)]
  fn next_u32(&mut self) -> u32 {
    self.next_u64() as u32
  }

  #[inline(always)]
  fn next_u64(&mut self) -> u64 {
    Lehmer128::next_u64(self)
  }

  fn fill_bytes(&mut self, dst: &mut [u8]) {
    rand_core::impls::fill_bytes_via_next(self, dst)
  }
}

#[cfg(feature = "rand_core")]
impl rand_core::SeedableRng for Lehmer128 {
  type Seed = [u8; 16];

  fn from_seed(seed: Self::Seed) -> Self {
    Self::from_state(u128::from_le_bytes(seed))
  }

  fn seed_from_u64(seed: u64) -> Self {
    Self::seed(seed)
  }
}
