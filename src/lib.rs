#![doc = include_str!("../README.md")]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod rng;
mod shuffle;

pub use rng::Rng64;
pub use shuffle::{partial_shuffle_k, shuffle_batch_2, shuffle_batch_23456, shuffle_one};

#[cfg(feature = "thread_local")]
pub mod thread_local {
  //! Access a thread-local random number generator for shuffling.
  //!
  //! If you want to shuffle many arrays, you should create a local
  //! generator instead (e.g. [crate::rng::fast::FastRng::from_operating_system])
  //! and call the top-level shuffle functions directly.

  use core::cell::Cell;
  use core::num::NonZeroU128;

  use crate::rng::fast::FastRng;

  std::thread_local! {
    static RNG: Cell<Option<NonZeroU128>> = const {
      Cell::new(None)
    };
  }

  // The function `with` is *NOT* logically re-entrant, so we must not expose
  // it publicly.

  #[inline(always)]
  fn with<F, T>(f: F) -> T
  where
    F: FnOnce(&mut FastRng) -> T
  {
    RNG.with(|cell| {
      let mut rng =
        match cell.get() {
          None =>
            FastRng::from_operating_system(),
          Some(s) =>
            FastRng::from_state(s),
        };
      let x = f(&mut rng);
      cell.set(Some(rng.state()));
      x
    })
  }

  /// Shuffles `storage` using the reference one-draw-per-swap algorithm and
  /// the thread-local generator. See [crate::shuffle_one].
  pub fn shuffle_one(storage: &mut [u64]) {
    with(|rng| crate::shuffle_one(storage, rng))
  }

  /// Shuffles `storage` using the two-phase batched algorithm and the
  /// thread-local generator. See [crate::shuffle_batch_2].
  pub fn shuffle_batch_2(storage: &mut [u64]) {
    with(|rng| crate::shuffle_batch_2(storage, rng))
  }

  /// Shuffles `storage` using the six-phase batched algorithm and the
  /// thread-local generator. See [crate::shuffle_batch_23456].
  pub fn shuffle_batch_23456(storage: &mut [u64]) {
    with(|rng| crate::shuffle_batch_23456(storage, rng))
  }
}
