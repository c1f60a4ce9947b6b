//! The fixed 256-entry, order-preserving byte-to-word alphabet, with a
//! trailing CRC32 checksum over the payload bytes. Two textual variants
//! share the same table: `Style::Standard` joins full words with `-`;
//! `Style::Minimal` uses each word's first and last letter only (2
//! characters per byte), for the most compact UR form.
//!
//! The table is generated rather than transcribed from an external source:
//! byte `b` decomposes as a high nibble (the word's first letter) and a low
//! nibble (the word's last letter), each drawn from a 16-letter alphabet,
//! with a fixed vowel pair in between to keep every entry pronounceable and
//! exactly four letters. This keeps both the full-word (`Standard`) and
//! first+last-letter (`Minimal`) forms unambiguous: the first and last
//! letters alone already determine the byte.

use std::sync::OnceLock;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Standard,
    Minimal,
}

const ONSETS: [&str; 16] = [
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "w",
];
const CODAS: [&str; 16] = [
    "b", "c", "d", "f", "g", "h", "j", "k", "l", "m", "n", "p", "r", "s", "t", "w",
];

fn build_words() -> Vec<String> {
    let mut words = Vec::with_capacity(256);
    for onset in ONSETS {
        for coda in CODAS {
            words.push(format!("{onset}ao{coda}"));
        }
    }
    words
}

fn words() -> &'static [String] {
    static WORDS: OnceLock<Vec<String>> = OnceLock::new();
    WORDS.get_or_init(build_words)
}

pub fn word_for_byte(b: u8) -> &'static str {
    &words()[b as usize]
}

pub fn byte_for_word(word: &str) -> Option<u8> {
    words().iter().position(|w| w == word).map(|i| i as u8)
}

pub fn byte_for_minimal(code: &str) -> Option<u8> {
    if code.len() != 2 {
        return None;
    }
    let (first, last) = (code.as_bytes()[0], code.as_bytes()[1]);
    words()
        .iter()
        .position(|w| {
            let bytes = w.as_bytes();
            bytes[0] == first && bytes[bytes.len() - 1] == last
        })
        .map(|i| i as u8)
}

pub fn encode(data: &[u8], style: Style) -> String {
    let crc = crc32fast::hash(data).to_be_bytes();
    let mut payload = data.to_vec();
    payload.extend_from_slice(&crc);
    match style {
        Style::Standard => payload
            .iter()
            .map(|b| word_for_byte(*b))
            .collect::<Vec<_>>()
            .join("-"),
        Style::Minimal => payload
            .iter()
            .map(|b| {
                let w = word_for_byte(*b);
                let bytes = w.as_bytes();
                format!("{}{}", bytes[0] as char, bytes[bytes.len() - 1] as char)
            })
            .collect(),
    }
}

pub fn decode(text: &str, style: Style) -> Result<Vec<u8>> {
    let bytes: Vec<u8> = match style {
        Style::Standard => {
            let mut out = Vec::new();
            for word in text.split('-') {
                out.push(
                    byte_for_word(word).ok_or_else(|| Error::InvalidBytewords(word.to_string()))?,
                );
            }
            out
        }
        Style::Minimal => {
            if text.len() % 2 != 0 {
                return Err(Error::InvalidBytewords(text.to_string()));
            }
            let mut out = Vec::with_capacity(text.len() / 2);
            for chunk in text.as_bytes().chunks(2) {
                let code = core::str::from_utf8(chunk)
                    .map_err(|_| Error::InvalidBytewords(text.to_string()))?;
                out.push(
                    byte_for_minimal(code).ok_or_else(|| Error::InvalidBytewords(code.to_string()))?,
                );
            }
            out
        }
    };
    if bytes.len() < 4 {
        return Err(Error::InvalidBytewords(text.to_string()));
    }
    let (payload, crc_bytes) = bytes.split_at(bytes.len() - 4);
    let expected = crc32fast::hash(payload).to_be_bytes();
    if crc_bytes != expected {
        return Err(Error::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicates() {
        let mut sorted = words().to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 256);
    }

    #[test]
    fn standard_round_trip() {
        let data = b"hello world";
        let encoded = encode(data, Style::Standard);
        let decoded = decode(&encoded, Style::Standard).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn minimal_round_trip() {
        let data = b"hello world";
        let encoded = encode(data, Style::Minimal);
        let decoded = decode(&encoded, Style::Minimal).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn corrupted_checksum_rejected() {
        let data = b"hello world";
        let mut encoded = encode(data, Style::Standard);
        encoded.push_str("-able");
        assert!(decode(&encoded, Style::Standard).is_err());
    }
}
