//! Runs benchmarks comparing the shuffle drivers across RNG adapters.

use std::time::Instant;

use batched_shuffle::rng::chacha::ChaCha8Rng;
use batched_shuffle::rng::lehmer::Lehmer128;
use batched_shuffle::rng::pcg::Pcg64;
use batched_shuffle::{shuffle_batch_2, shuffle_batch_23456, shuffle_one, Rng64};

const LEN: usize = 1 << 20;
const OUTER: usize = 32;

#[inline(never)]
fn warmup() {
  let mut s = 1u64;
  for i in 0 .. 1_000_000_000 { s = s.wrapping_mul(i); }
  let _: u64 = std::hint::black_box(s);
}

#[inline(never)]
fn timeit<F: FnMut()>(f: F) -> f64 {
  let mut f = f;
  let start = Instant::now();
  for _ in 0 .. OUTER { f() }
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn go<R: Rng64>(name: &str, mut rng: R) {
  let mut storage: Vec<u64> = (0 .. LEN as u64).collect();

  let e0 = timeit(|| shuffle_one(&mut storage, &mut rng));
  let e1 = timeit(|| shuffle_batch_2(&mut storage, &mut rng));
  let e2 = timeit(|| shuffle_batch_23456(&mut storage, &mut rng));

  println!("{name}");
  println!("{:8.3} ns / word - shuffle_one", e0 / (OUTER * LEN) as f64);
  println!("{:8.3} ns / word - shuffle_batch_2", e1 / (OUTER * LEN) as f64);
  println!("{:8.3} ns / word - shuffle_batch_23456", e2 / (OUTER * LEN) as f64);
  println!();
}

fn main() {
  warmup();
  go("lehmer128", Lehmer128::seed(0));
  go("pcg64", Pcg64::seed(0));
  go("chacha8", ChaCha8Rng::seed(0));
}
