//! Bridges any [`rand_core::RngCore`] implementation into an [`Rng64`]
//! source, so generators from the wider `rand` ecosystem (`rand_pcg`,
//! `rand_xoshiro`, `rand_chacha`, ...) can drive the shuffle drivers without
//! a crate-specific adapter.

use rand_core::RngCore;

use super::Rng64;

/// Wraps any [`rand_core::RngCore`] so it satisfies [`Rng64`].
///
/// ```ignore
/// let mut rng = RandCoreRng(rand_pcg::Pcg64::seed_from_u64(0));
/// batched_shuffle::shuffle_batch_23456(&mut storage, &mut rng);
/// ```
#[derive(Clone)]
pub struct RandCoreRng<R>(pub R);

impl<R: RngCore> Rng64 for RandCoreRng<R> {
  #[inline(always)]
  fn next_u64(&mut self) -> u64 {
    self.0.next_u64()
  }
}
