//! Shuffles a deck of 52 cards and prints the result.

use batched_shuffle::rng::lehmer::Lehmer128;
use batched_shuffle::shuffle_batch_23456;

fn main() {
  let mut rng = Lehmer128::seed(0x5eed);
  let mut deck: [u64; 52] = core::array::from_fn(|i| i as u64);

  shuffle_batch_23456(&mut deck, &mut rng);

  for card in deck {
    let suit = ["clubs", "diamonds", "hearts", "spades"][(card / 13) as usize];
    let rank = card % 13 + 1;
    println!("{rank} of {suit}");
  }
}
