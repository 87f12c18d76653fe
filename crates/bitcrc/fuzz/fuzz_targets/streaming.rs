//! Fuzz target for the streaming engine API.
//!
//! Arbitrary update sequences must agree with a one-shot computation,
//! resuming from a mid-stream checksum must land on the same result, and
//! appending the wire-order checksum must produce the catalog residue.

#![no_main]

use arbitrary::Arbitrary;
use bitcrc::{AnyCrc, catalog};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Index into the catalog
  algorithm: u8,
  /// Where to checkpoint for resume
  split: usize,
}

fuzz_target!(|input: Input| {
  let alg = catalog::ALL[usize::from(input.algorithm) % catalog::ALL.len()];
  let data = &input.data;

  let mut oneshot = AnyCrc::new(&alg.params).unwrap();
  oneshot.update(data);
  let expected = oneshot.finalize();

  let mut hasher = AnyCrc::new(&alg.params).unwrap();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }
  assert_eq!(hasher.finalize(), expected, "{} streaming mismatch", alg.name);

  let split = if data.is_empty() { 0 } else { input.split % (data.len() + 1) };
  let (head, tail) = data.split_at(split);
  let mut first = AnyCrc::new(&alg.params).unwrap();
  first.update(head);
  let mut resumed = AnyCrc::new(&alg.params).unwrap().resume(first.finalize());
  resumed.update(tail);
  assert_eq!(resumed.finalize(), expected, "{} resume mismatch", alg.name);

  let trailer = oneshot.finalize_bytes();
  oneshot.update(trailer.as_ref());
  assert_eq!(oneshot.residue(), alg.residue, "{} residue mismatch", alg.name);
});
