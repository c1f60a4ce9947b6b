use dcbor::prelude::*;

use crate::tags::TAG_SALT;

/// Arbitrary-length salt material for password-based key derivation.
/// Unlike `Digest`/`ARID`/`Nonce`, salts have no fixed width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Salt(Vec<u8>);

impl Salt {
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    pub fn new_random(len: usize) -> Self {
        Self::new_random_with_rng(len, &mut bc_crypto::SecureRandomNumberGenerator)
    }

    pub fn new_random_with_rng(len: usize, rng: &mut dyn bc_crypto::RandomNumberGenerator) -> Self {
        Self(rng.random_bytes(len))
    }

    pub fn data(&self) -> &[u8] {
        &self.0
    }

    pub fn hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl CBORTagged for Salt {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_SALT, "salt")]
    }
}

impl CBORTaggedEncodable for Salt {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::to_byte_string(&self.0)
    }
}

impl CBORTaggedDecodable for Salt {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let bytes: Vec<u8> = cbor.clone().try_into()?;
        Ok(Self(bytes))
    }
}

impl From<Salt> for CBOR {
    fn from(value: Salt) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for Salt {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
