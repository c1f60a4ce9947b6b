//! Protobuf-shaped field framing: a varint tag (field number << 3 |
//! wire type) followed by either a varint value or a length-delimited
//! byte run.

use crate::error::{Error, Result};
use crate::varint::{decode_varint, encode_varint};

pub const WIRE_TYPE_VARINT: u8 = 0;
pub const WIRE_TYPE_LEN: u8 = 2;

pub fn encode_tag(field: u32, wire_type: u8) -> Vec<u8> {
    encode_varint(((field as u64) << 3) | wire_type as u64)
}

/// Returns `(field, wire_type, bytes consumed)`.
pub fn decode_tag(data: &[u8], pos: usize) -> Result<(u32, u8, usize)> {
    let (tag, len) = decode_varint(data, pos)?;
    let field = (tag >> 3) as u32;
    let wire_type = (tag & 0x7) as u8;
    Ok((field, wire_type, len))
}

pub fn encode_length_delimited(bytes: &[u8]) -> Vec<u8> {
    let mut out = encode_varint(bytes.len() as u64);
    out.extend_from_slice(bytes);
    out
}

/// Returns the field's byte slice and the number of bytes consumed
/// (length prefix plus payload) starting at `data[pos]`.
pub fn decode_length_delimited(data: &[u8], pos: usize) -> Result<(&[u8], usize)> {
    let (len, len_size) = decode_varint(data, pos)?;
    let len = len as usize;
    let start = pos + len_size;
    let end = start.checked_add(len).ok_or(Error::Truncated)?;
    let slice = data.get(start..end).ok_or(Error::Truncated)?;
    Ok((slice, len_size + len))
}
