//! The batched Fisher–Yates shuffle.
//!
//! [`partial_shuffle_k`] is the core primitive: it performs `k` Fisher-Yates
//! swap steps on a shrinking prefix of `storage` using, in the common case,
//! exactly one draw from the RNG. [`shuffle_one`], [`shuffle_batch_2`], and
//! [`shuffle_batch_23456`] are drivers built on top of it, each walking the
//! array from the tail toward the head and choosing a batch size `k`
//! appropriate to how many elements remain.

use crate::rng::Rng64;

/// Performs `k` steps of a Fisher–Yates shuffle on the prefix
/// `storage[0 .. n]`.
///
/// Swaps positions `n-1, n-2, ..., n-k` each with a uniformly chosen target
/// in `[0, n)`, `[0, n-1)`, ..., `[0, n-k+1)` respectively, jointly uniform
/// over the cartesian product of those ranges. A single 64-bit draw from
/// `rng` furnishes all `k` indices via repeated application of Lemire's
/// nearly-divisionless bounded sampling, reusing the low half of each
/// 128-bit product as the next random seed; this is redrawn only on the
/// (rare) occasion that the shortcut bias check below fails.
///
/// # Preconditions
///
/// - `1 <= k <= 7`
/// - `k <= n`
/// - `bound >= n * (n-1) * ... * (n-k+1)`, and that product does not
///   overflow `u64`
///
/// These are debug-asserted; violating them in a release build is a logic
/// error in the caller (the drivers in this module never violate them).
///
/// # Returns
///
/// A bound `B' >= n * (n-1) * ... * (n-k+1)` (in fact exactly that product,
/// in the rejection path; unchanged from the input `bound` otherwise),
/// suitable as the `bound` argument for a subsequent call with the same `k`
/// and a smaller `n`.
#[inline]
pub fn partial_shuffle_k<R: Rng64>(
  storage: &mut [u64],
  n: u64,
  k: u64,
  bound: u64,
  rng: &mut R,
) -> u64 {
  debug_assert!(k >= 1 && k <= 7);
  debug_assert!(k <= n);
  debug_assert!((n as usize) <= storage.len());

  let mut indexes = [0u64; 7];
  let mut r = rng.next_u64();

  for i in 0 .. k {
    let x = (n - i) as u128 * r as u128;
    r = x as u64;
    indexes[i as usize] = (x >> 64) as u64;
  }

  let bound = if r >= bound {
    bound
  } else {
    let mut exact = n;
    for i in 1 .. k {
      exact *= n - i;
    }
    // t = (-exact) mod exact, computed via wrapping subtraction.
    let t = 0u64.wrapping_sub(exact) % exact;

    while r < t {
      r = rng.next_u64();
      for i in 0 .. k {
        let x = (n - i) as u128 * r as u128;
        r = x as u64;
        indexes[i as usize] = (x >> 64) as u64;
      }
    }

    exact
  };

  for i in 0 .. k {
    storage.swap((n - i - 1) as usize, indexes[i as usize] as usize);
  }

  bound
}

/// Reference Fisher–Yates shuffle, one RNG draw per swap step.
///
/// Provided as a baseline for testing and benchmarking the batched drivers
/// against; it is not itself batched and performs `O(n)` RNG calls.
pub fn shuffle_one<R: Rng64>(storage: &mut [u64], rng: &mut R) {
  let mut i = storage.len() as u64;
  while i > 1 {
    let _ = partial_shuffle_k(storage, i, 1, i, rng);
    i -= 1;
  }
}

/// The two-phase batched Fisher–Yates shuffle.
///
/// Draws batches of `k = 1` while `n > 2^30` (where a `k = 2` batch's
/// bound would need headroom this driver does not bother to provide), then
/// switches to `k = 2` for the remainder, threading a single `bound` through
/// the body phase.
pub fn shuffle_batch_2<R: Rng64>(storage: &mut [u64], rng: &mut R) {
  let mut i = storage.len() as u64;

  while i > 1 << 30 {
    let _ = partial_shuffle_k(storage, i, 1, i, rng);
    i -= 1;
  }

  let mut bound = 1u64 << 60;
  while i > 1 {
    bound = partial_shuffle_k(storage, i, 2, bound, rng);
    i -= 2;
  }
}

/// The six-phase batched Fisher–Yates shuffle.
///
/// Increases the batch size `k` as `n` shrinks, so that
/// `n * (n-1) * ... * (n-k+1)` stays comfortably under a `u64` ceiling for
/// every `n` in that phase's range, and finishes with a cleanup batch
/// covering whatever is left once `n <= 6`.
///
/// | Phase | `n` range            | `k` | initial `bound` |
/// |-------|----------------------|-----|------------------|
/// | 1     | `n > 2^30`           | 1   | `n`              |
/// | 2     | `2^19 < n <= 2^30`   | 2   | `2^60`           |
/// | 3     | `2^14 < n <= 2^19`   | 3   | `2^57`           |
/// | 4     | `2^11 < n <= 2^14`   | 4   | `2^56`           |
/// | 5     | `2^9  < n <= 2^11`   | 5   | `2^55`           |
/// | 6     | `6 < n <= 2^9`       | 6   | `2^54`           |
/// | 7     | `n <= 6` (cleanup)   | n-1 | `720`            |
///
/// Between phases the running `bound` is not carried across a `k` change;
/// it is re-seeded to the tabulated power of two for the new phase.
pub fn shuffle_batch_23456<R: Rng64>(storage: &mut [u64], rng: &mut R) {
  let mut i = storage.len() as u64;

  while i > 1 << 30 {
    let _ = partial_shuffle_k(storage, i, 1, i, rng);
    i -= 1;
  }

  let mut bound = 1u64 << 60;
  while i > 1 << 19 {
    bound = partial_shuffle_k(storage, i, 2, bound, rng);
    i -= 2;
  }

  let mut bound = 1u64 << 57;
  while i > 1 << 14 {
    bound = partial_shuffle_k(storage, i, 3, bound, rng);
    i -= 3;
  }

  let mut bound = 1u64 << 56;
  while i > 1 << 11 {
    bound = partial_shuffle_k(storage, i, 4, bound, rng);
    i -= 4;
  }

  let mut bound = 1u64 << 55;
  while i > 1 << 9 {
    bound = partial_shuffle_k(storage, i, 5, bound, rng);
    i -= 5;
  }

  let mut bound = 1u64 << 54;
  while i > 6 {
    bound = partial_shuffle_k(storage, i, 6, bound, rng);
    i -= 6;
  }

  if i > 1 {
    let _ = partial_shuffle_k(storage, i, i - 1, 720, rng);
  }
}
