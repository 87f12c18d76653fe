//! Fuzz target for parameter parsing and validation.
//!
//! Any string either fails to parse or yields parameters that construct an
//! engine, and printing parsed parameters parses back to the same value.

#![no_main]

use bitcrc::{AnyCrc, CrcParams};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
  let Ok(params) = text.parse::<CrcParams>() else {
    return;
  };

  assert!(params.validate().is_ok());
  let mut crc = AnyCrc::new(&params).unwrap();
  crc.update(text.as_bytes());
  let _ = crc.finalize();

  let printed = params.to_string();
  assert_eq!(printed.parse::<CrcParams>(), Ok(params), "round trip: {printed}");
});
