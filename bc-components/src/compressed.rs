use std::io::{Read, Write};

use dcbor::prelude::*;
use flate2::write::DeflateEncoder;
use flate2::read::DeflateDecoder;
use flate2::Compression;

use crate::error::{Error, Result};
use crate::tags::TAG_COMPRESSED;

/// A DEFLATE-compressed byte string, tagged with its decompressed length and
/// CRC-32 so corruption is caught before the decompressed bytes are trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    checksum: u32,
    size: usize,
    compressed: Vec<u8>,
}

impl Compressed {
    /// Compresses `data`. If DEFLATE doesn't actually shrink it, stores it
    /// uncompressed instead; either way `size`/`checksum` describe the
    /// original.
    pub fn from_decompressed(data: &[u8]) -> Self {
        let checksum = crc32fast::hash(data);
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::new(6));
        encoder.write_all(data).expect("in-memory write cannot fail");
        let deflated = encoder.finish().expect("in-memory finish cannot fail");
        let compressed = if deflated.len() < data.len() { deflated } else { data.to_vec() };
        Self { checksum, size: data.len(), compressed }
    }

    pub fn decompress(&self) -> Result<Vec<u8>> {
        let data = if self.compressed.len() == self.size {
            self.compressed.clone()
        } else {
            let mut decoder = DeflateDecoder::new(self.compressed.as_slice());
            let mut out = Vec::with_capacity(self.size);
            decoder
                .read_to_end(&mut out)
                .map_err(|e| Error::InvalidLength(self.size, e.raw_os_error().unwrap_or(0) as usize))?;
            out
        };
        if data.len() != self.size || crc32fast::hash(&data) != self.checksum {
            return Err(Error::WrongSecret);
        }
        Ok(data)
    }

    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl CBORTagged for Compressed {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_COMPRESSED, "compressed")]
    }
}

impl CBORTaggedEncodable for Compressed {
    fn untagged_cbor(&self) -> CBOR {
        vec![
            CBOR::from(self.checksum),
            CBOR::from(self.size as u64),
            CBOR::to_byte_string(&self.compressed),
        ]
        .into()
    }
}

impl CBORTaggedDecodable for Compressed {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let items: Vec<CBOR> = match cbor.as_case() {
            CBORCase::Array(items) => items.clone(),
            _ => return Err(dcbor::Error::WrongType),
        };
        if items.len() != 3 {
            return Err(dcbor::Error::WrongType);
        }
        let checksum: u32 = items[0].clone().try_into()?;
        let size: u64 = items[1].clone().try_into()?;
        let compressed: Vec<u8> = items[2].clone().try_into()?;
        Ok(Self { checksum, size: size as usize, compressed })
    }
}

impl From<Compressed> for CBOR {
    fn from(value: Compressed) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for Compressed {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
