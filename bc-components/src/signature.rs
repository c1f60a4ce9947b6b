use dcbor::prelude::*;

use crate::signing_key::SigningScheme;
use crate::tags::TAG_SIGNATURE;

/// A signature paired with the scheme it was produced under. Default-scheme
/// (`Schnorr`) signatures encode as bare bytes; every other scheme encodes
/// as `[discriminator, bytes]`, mirroring `SigningPrivateKey`/
/// `SigningPublicKey`'s own encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    scheme: SigningScheme,
    bytes: Vec<u8>,
}

impl Signature {
    pub fn new(scheme: SigningScheme, bytes: Vec<u8>) -> Self {
        Self { scheme, bytes }
    }

    pub fn scheme(&self) -> SigningScheme {
        self.scheme
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes
    }
}

impl CBORTagged for Signature {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_SIGNATURE, "signature")]
    }
}

impl CBORTaggedEncodable for Signature {
    fn untagged_cbor(&self) -> CBOR {
        crate::signing_key::encode_signature_bytes(self.scheme, &self.bytes)
    }
}

impl CBORTaggedDecodable for Signature {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let (scheme, bytes) = crate::signing_key::decode_signature_bytes(cbor)?;
        Ok(Self { scheme, bytes })
    }
}

impl From<Signature> for CBOR {
    fn from(value: Signature) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for Signature {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
