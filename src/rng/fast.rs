//! A high performance non-cryptographic random number generator.
//!
//! This is the crate's own general-purpose `Rng64` source, used as the
//! default generator for [`crate::thread_local`]. It is independent of the
//! Lehmer-128 and PCG-64 adapters in sibling modules, which model the
//! external generators named in the design notes; this one is carried over
//! from this crate's own non-cryptographic RNG lineage.

use core::num::NonZeroU128;

use super::Rng64;

#[inline(always)]
const fn hash(x: NonZeroU128) -> NonZeroU128 {
  // The hash uses the multiplier
  //
  //   M = round_nearest_odd(EULER_MASCHERONI * 2^128)
  //
  // The Euler-Mascheroni constant was selected because it is a well-known
  // number in the range (0.5, 1.0).

  const M: u128 = 0x93c4_67e3_7db0_c7a4_d1be_3f81_0152_cb57;

  let x = x.get();
  let x = x.wrapping_mul(M);
  let x = x.swap_bytes();
  let x = x.wrapping_mul(M);
  let x = x.swap_bytes();
  let x = x.wrapping_mul(M);
  unsafe { NonZeroU128::new_unchecked(x) }
}

/// A fast, non-cryptographic `Rng64` source with 128 bits of state.
#[derive(Clone)]
pub struct FastRng {
  state: NonZeroU128,
}

impl FastRng {
  /// Creates a random number generator with an initial state derived by
  /// hashing the given `u64` seed.
  #[inline]
  pub const fn seed(seed: u64) -> Self {
    let s = seed as u128;
    let s = s | 1 << 64;
    let s = NonZeroU128::new(s).unwrap();
    Self { state: hash(s) }
  }

  /// Retrieves the current state of the random number generator.
  #[inline(always)]
  pub const fn state(&self) -> NonZeroU128 {
    self.state
  }

  /// Creates a random number generator with a particular initial state.
  ///
  /// <div class="warning">
  ///
  /// If you want to deterministically initialize a generator from a small
  /// integer or other weak seed, you should *NOT* use this function and
  /// should instead use [`FastRng::seed`], which hashes its argument.
  ///
  /// </div>
  #[inline(always)]
  pub const fn from_state(state: NonZeroU128) -> Self {
    Self { state }
  }

  /// Creates a random number generator with a random seed retrieved from the
  /// operating system.
  #[cfg(feature = "getrandom")]
  #[inline(never)]
  #[cold]
  pub fn from_operating_system() -> Self {
    let mut buf = [0; 16];
    getrandom::fill(&mut buf).expect("getrandom::fill failed!");
    let s = u128::from_le_bytes(buf);
    let s = s | 1;
    let s = NonZeroU128::new(s).unwrap();
    Self { state: s }
  }

  /// Splits off a new random number generator that may be used along with
  /// the original.
  #[inline(always)]
  pub fn split(&mut self) -> Self {
    let x = self.next_u64();
    let y = self.next_u64();
    let s = x as u128 ^ (y as u128) << 64;
    let s = s | 1;
    let s = NonZeroU128::new(s).unwrap();
    Self { state: s }
  }

  /// Draws the next `u64` from the generator.
  #[inline(always)]
  pub fn next_u64(&mut self) -> u64 {
    let s = self.state.get();
    let x = s as u64;
    let y = (s >> 64) as u64;
    let u = y ^ y >> 19;
    let v = x ^ y.rotate_right(7);
    let w = x as u128 * x as u128;
    let z = y.wrapping_add(w as u64 ^ (w >> 64) as u64);
    let s = u as u128 ^ (v as u128) << 64;
    self.state = unsafe { NonZeroU128::new_unchecked(s) };
    z
  }
}

impl Rng64 for FastRng {
  #[inline(always)]
  fn next_u64(&mut self) -> u64 {
    FastRng::next_u64(self)
  }
}

#[cfg(feature = "rand_core")]
impl rand_core::RngCore for FastRng {
  #[inline(always)]
  fn next_u32(&mut self) -> u32 {
    self.next_u64() as u32
  }

  #[inline(always)]
  fn next_u64(&mut self) -> u64 {
    FastRng::next_u64(self)
  }

  fn fill_bytes(&mut self, dst: &mut [u8]) {
    rand_core::impls::fill_bytes_via_next(self, dst)
  }
}

#[cfg(feature = "rand_core")]
impl rand_core::SeedableRng for FastRng {
  type Seed = [u8; 16];

  fn from_seed(seed: Self::Seed) -> Self {
    let s = u128::from_le_bytes(seed);
    let s = s | 1;
    let s = NonZeroU128::new(s).unwrap();
    Self::from_state(s)
  }

  fn seed_from_u64(seed: u64) -> Self {
    Self::seed(seed)
  }

  fn from_rng(rng: &mut impl rand_core::RngCore) -> Self {
    let x = rng.next_u64();
    let y = rng.next_u64();
    let s = x as u128 ^ (y as u128) << 64;
    let s = s | 1;
    let s = NonZeroU128::new(s).unwrap();
    Self::from_state(s)
  }
}
