use dcbor::prelude::*;

use crate::error::{Error, Result};
use crate::tags::TAG_DIGEST;

pub const DIGEST_SIZE: usize = 32;

/// A 32-byte SHA-256 digest. Ordered and compared by byte content, so
/// digests sort the way `Node` assertion-ordering requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    pub fn from_image(data: impl AsRef<[u8]>) -> Self {
        Self(bc_crypto::sha256(data))
    }

    pub fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_data(data: &[u8]) -> Result<Self> {
        if data.len() != DIGEST_SIZE {
            return Err(Error::InvalidLength(DIGEST_SIZE, data.len()));
        }
        let mut bytes = [0u8; DIGEST_SIZE];
        bytes.copy_from_slice(data);
        Ok(Self(bytes))
    }

    pub fn data(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short human form: the first 4 bytes, hex-encoded.
    pub fn short_description(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl core::fmt::Display for Digest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Digest({})", self.short_description())
    }
}

impl CBORTagged for Digest {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_DIGEST, "digest")]
    }
}

impl CBORTaggedEncodable for Digest {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::to_byte_string(self.0)
    }
}

impl CBORTaggedDecodable for Digest {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let bytes: Vec<u8> = cbor.clone().try_into()?;
        Digest::from_data(&bytes)
            .map_err(|_| dcbor::Error::Custom(format!("digest must be {} bytes", DIGEST_SIZE)))
    }
}

impl From<Digest> for CBOR {
    fn from(value: Digest) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for Digest {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
