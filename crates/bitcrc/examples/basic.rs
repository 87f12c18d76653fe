//! Basic usage: catalog types, arbitrary parameters and wire framing.
//!
//! Run with: `cargo run --example basic -p bitcrc`

use bitcrc::{AnyCrc, Crc16, Crc16Ibm3740, Crc16Kermit, Crc16SpiFujitsu, Crc16Xmodem, CrcParams, catalog};

fn main() {
  println!("=== Bit-Serial CRC Examples ===\n");

  catalog_examples();
  parameter_examples();
  framing_example();
}

/// The four CRC-16 variants sharing polynomial 0x1021.
fn catalog_examples() {
  println!("--- Catalog Entries ---\n");

  let data = catalog::CHECK_INPUT;

  let xmodem = Crc16Xmodem::checksum(data);
  println!("CRC-16/XMODEM:      0x{xmodem:04X}");
  assert_eq!(xmodem, 0x31C3);

  let kermit = Crc16Kermit::checksum(data);
  println!("CRC-16/KERMIT:      0x{kermit:04X}");
  assert_eq!(kermit, 0x2189);

  let ibm3740 = Crc16Ibm3740::checksum(data);
  println!("CRC-16/IBM-3740:    0x{ibm3740:04X}");
  assert_eq!(ibm3740, 0x29B1);

  let fujitsu = Crc16SpiFujitsu::checksum(data);
  println!("CRC-16/SPI-FUJITSU: 0x{fujitsu:04X}");
  assert_eq!(fujitsu, 0xE5CC);

  println!();
}

/// Parameters built by hand, parsed from text, or looked up by name.
fn parameter_examples() {
  println!("--- Arbitrary Parameters ---\n");

  let params = CrcParams {
    width: 16,
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
  };
  match Crc16::checksum(&params, catalog::CHECK_INPUT) {
    Ok(crc) => println!("{params}\n  -> 0x{crc:04X}"),
    Err(err) => println!("rejected: {err}"),
  }

  let parsed: Result<CrcParams, _> = "width=32 poly=0x04c11db7 init=0xffffffff refin=true refout=true xorout=0xffffffff".parse();
  match parsed.map(|p| AnyCrc::new(&p)) {
    Ok(Ok(mut crc)) => {
      crc.update(catalog::CHECK_INPUT);
      println!("parsed CRC-32:      0x{:08X}", crc.finalize());
    }
    Ok(Err(err)) => println!("rejected: {err}"),
    Err(err) => println!("parse error: {err}"),
  }

  if let Ok(kermit) = "crc-ccitt".parse::<CrcParams>() {
    println!("alias 'crc-ccitt':  {kermit}");
  }

  let bad = CrcParams { polynomial: 0x1_1021, ..params };
  if let Err(err) = Crc16::new(&bad) {
    println!("out of range:       {err}");
  }

  println!();
}

/// Append the checksum in wire order and check the residue at the receiver.
fn framing_example() {
  println!("--- Framing and Residue ---\n");

  let alg = &catalog::CRC16_KERMIT;
  let payload = b"hello, world";

  let Ok(mut sender) = AnyCrc::new(&alg.params) else {
    return;
  };
  sender.update(payload);
  let mut frame = payload.to_vec();
  frame.extend_from_slice(sender.finalize_bytes().as_ref());
  println!("frame: {frame:02X?}");

  let Ok(mut receiver) = AnyCrc::new(&alg.params) else {
    return;
  };
  receiver.update(&frame);
  println!("residue: 0x{:04X} (expected 0x{:04X})", receiver.residue(), alg.residue);
  assert_eq!(receiver.residue(), alg.residue);

  println!();
}
