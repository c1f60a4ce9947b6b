//! `SignalMessage`: the wire form a [`bc_ratchet::RatchetMessage`] travels
//! as between peers — a version byte, a protobuf-shaped body carrying the
//! four ratchet fields, and a trailing truncated-MAC tag.

use bc_ratchet::RatchetMessage;

use crate::error::{Error, Result};
use crate::varint::{decode_varint, encode_varint};
use crate::wire::{
    decode_length_delimited, decode_tag, encode_length_delimited, encode_tag, WIRE_TYPE_LEN,
    WIRE_TYPE_VARINT,
};

/// DJB_TYPE byte the reference wire form prefixes onto a raw Curve25519
/// public key, distinguishing it from other key encodings on the wire.
const DJB_KEY_TYPE: u8 = 0x05;
const MAC_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalMessage {
    pub message_version: u8,
    pub current_version: u8,
    pub sender_ratchet_public: [u8; 32],
    pub counter: u32,
    pub previous_counter: u32,
    pub ciphertext: Vec<u8>,
    pub mac: [u8; 8],
}

impl SignalMessage {
    /// Wraps a ratchet message for transport, stamping the library's own
    /// current version into the low nibble alongside the message's version.
    pub fn from_ratchet_message(message: &RatchetMessage) -> Self {
        Self {
            message_version: message.version,
            current_version: bc_ratchet::CURRENT_VERSION,
            sender_ratchet_public: message.sender_ratchet_public,
            counter: message.counter,
            previous_counter: message.previous_counter,
            ciphertext: message.ciphertext.clone(),
            mac: message.mac,
        }
    }

    pub fn into_ratchet_message(self) -> RatchetMessage {
        RatchetMessage {
            version: self.message_version,
            sender_ratchet_public: self.sender_ratchet_public,
            previous_counter: self.previous_counter,
            counter: self.counter,
            ciphertext: self.ciphertext,
            mac: self.mac,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 1 + 35 + 5 + 5 + 5 + self.ciphertext.len() + MAC_SIZE);
        out.push((self.message_version << 4) | self.current_version);

        out.extend(encode_tag(1, WIRE_TYPE_LEN));
        let mut keyed = Vec::with_capacity(33);
        keyed.push(DJB_KEY_TYPE);
        keyed.extend_from_slice(&self.sender_ratchet_public);
        out.extend(encode_length_delimited(&keyed));

        out.extend(encode_tag(2, WIRE_TYPE_VARINT));
        out.extend(encode_varint(self.counter as u64));

        out.extend(encode_tag(3, WIRE_TYPE_VARINT));
        out.extend(encode_varint(self.previous_counter as u64));

        out.extend(encode_tag(4, WIRE_TYPE_LEN));
        out.extend(encode_length_delimited(&self.ciphertext));

        out.extend_from_slice(&self.mac);
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < 1 + MAC_SIZE {
            return Err(Error::Truncated);
        }
        let version_byte = data[0];
        let message_version = version_byte >> 4;
        let current_version = version_byte & 0x0f;

        let mac_start = data.len() - MAC_SIZE;
        let body = &data[1..mac_start];
        let mut mac = [0u8; MAC_SIZE];
        mac.copy_from_slice(&data[mac_start..]);

        let mut sender_ratchet_public = None;
        let mut counter = None;
        let mut previous_counter = None;
        let mut ciphertext = None;

        let mut pos = 0;
        while pos < body.len() {
            let (field, wire_type, tag_len) = decode_tag(body, pos)?;
            pos += tag_len;
            match (field, wire_type) {
                (1, WIRE_TYPE_LEN) => {
                    let (slice, len) = decode_length_delimited(body, pos)?;
                    pos += len;
                    if slice.len() != 33 {
                        return Err(Error::InvalidKeyLength { expected: 33, actual: slice.len() });
                    }
                    if slice[0] != DJB_KEY_TYPE {
                        return Err(Error::InvalidKeyTypePrefix { found: slice[0] });
                    }
                    let mut key = [0u8; 32];
                    key.copy_from_slice(&slice[1..]);
                    sender_ratchet_public = Some(key);
                }
                (2, WIRE_TYPE_VARINT) => {
                    let (value, len) = decode_varint(body, pos)?;
                    pos += len;
                    counter = Some(value as u32);
                }
                (3, WIRE_TYPE_VARINT) => {
                    let (value, len) = decode_varint(body, pos)?;
                    pos += len;
                    previous_counter = Some(value as u32);
                }
                (4, WIRE_TYPE_LEN) => {
                    let (slice, len) = decode_length_delimited(body, pos)?;
                    pos += len;
                    ciphertext = Some(slice.to_vec());
                }
                (field, wire_type) => {
                    return Err(Error::UnsupportedWireType { field, wire_type });
                }
            }
        }
        if pos != body.len() {
            return Err(Error::TrailingData);
        }

        Ok(Self {
            message_version,
            current_version,
            sender_ratchet_public: sender_ratchet_public
                .ok_or(Error::MissingField { field: "sender_ratchet_public" })?,
            counter: counter.ok_or(Error::MissingField { field: "counter" })?,
            previous_counter: previous_counter
                .ok_or(Error::MissingField { field: "previous_counter" })?,
            ciphertext: ciphertext.ok_or(Error::MissingField { field: "ciphertext" })?,
            mac,
        })
    }
}
