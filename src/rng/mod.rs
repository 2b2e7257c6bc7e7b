//! The random number generator contract consumed by the shuffle drivers.
//!
//! The core shuffle algorithms ([`crate::shuffle_one`],
//! [`crate::shuffle_batch_2`], [`crate::shuffle_batch_23456`]) are generic
//! over any source of uniformly distributed 64-bit words. This module
//! defines that contract ([`Rng64`]) and provides a handful of concrete
//! adapters that satisfy it: [`lehmer::Lehmer128`], [`pcg::Pcg64`],
//! [`fast::FastRng`], and, behind the `chacha8` feature, `chacha::ChaCha8Rng`.
//! Behind the `rand_core` feature, `RandCoreRng` wraps any
//! `rand_core::RngCore` implementation to satisfy [`Rng64`] as well.

pub mod fast;
pub mod lehmer;
pub mod pcg;

#[cfg(feature = "chacha8")]
pub mod chacha;

#[cfg(feature = "rand_core")]
mod rand_core_bridge;

#[cfg(feature = "rand_core")]
pub use rand_core_bridge::RandCoreRng;

/// A source of uniformly random 64-bit words.
///
/// This is the entire contract the shuffle drivers require: one infallible
/// operation that returns the next word of the stream. No other capability
/// (stream splitting, jumping, counter manipulation) is used by the core.
///
/// Implementors own their state exclusively; the shuffle drivers take a
/// mutable borrow for the duration of a call and never retain it.
pub trait Rng64 {
  /// Draws the next uniformly random 64-bit word from the stream.
  fn next_u64(&mut self) -> u64;
}

impl<R: Rng64 + ?Sized> Rng64 for &mut R {
  #[inline(always)]
  fn next_u64(&mut self) -> u64 {
    R::next_u64(self)
  }
}

/// A stateless mixing function used to turn a weak `u64` seed into a well
/// distributed state word.
///
/// This is the SplitMix64 finalizer, used by the original `lehmer64`
/// reference implementation to derive its 128-bit initial state from a
/// single `u64` seed. It has no bearing on the shuffle algorithm itself; it
/// exists purely as a seeding helper for the adapters in this module.
#[inline(always)]
pub(crate) const fn splitmix64(index: u64) -> u64 {
  let z = index.wrapping_mul(0x9E37_79B9_7F4A_7C15);
  let z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
  let z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
  z ^ (z >> 31)
}
