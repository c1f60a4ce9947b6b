use flate2::read::{DeflateDecoder, DeflateEncoder};
use flate2::Compression;
use std::io::Read;

use crate::Error;

pub const DEFAULT_LEVEL: u32 = 6;

pub fn deflate(data: &[u8], level: u32) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(data, Compression::new(level));
    let mut out = Vec::new();
    encoder.read_to_end(&mut out).expect("in-memory DEFLATE does not fail");
    out
}

pub fn inflate(data: &[u8]) -> crate::Result<Vec<u8>> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(|_| Error::Compression)?;
    Ok(out)
}

pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}
