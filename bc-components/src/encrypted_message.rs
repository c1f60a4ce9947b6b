use dcbor::prelude::*;

use crate::nonce::Nonce;
use crate::tags::TAG_ENCRYPTED_MESSAGE;

/// An IETF ChaCha20-Poly1305 ciphertext (tag included) plus the nonce and
/// associated data it was sealed under. Encodes as `[ciphertext, nonce,
/// aad]` per spec.md §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    ciphertext: Vec<u8>,
    nonce: Nonce,
    aad: Vec<u8>,
}

impl EncryptedMessage {
    pub fn new(ciphertext: Vec<u8>, nonce: Nonce, aad: Vec<u8>) -> Self {
        Self { ciphertext, nonce, aad }
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn nonce(&self) -> Nonce {
        self.nonce
    }

    pub fn aad(&self) -> &[u8] {
        &self.aad
    }
}

impl CBORTagged for EncryptedMessage {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_ENCRYPTED_MESSAGE, "encrypted")]
    }
}

impl CBORTaggedEncodable for EncryptedMessage {
    fn untagged_cbor(&self) -> CBOR {
        vec![
            CBOR::to_byte_string(&self.ciphertext),
            CBOR::from(self.nonce),
            CBOR::to_byte_string(&self.aad),
        ]
        .into()
    }
}

impl CBORTaggedDecodable for EncryptedMessage {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let items: Vec<CBOR> = match cbor.as_case() {
            CBORCase::Array(items) => items.clone(),
            _ => return Err(dcbor::Error::WrongType),
        };
        if items.len() != 3 {
            return Err(dcbor::Error::WrongType);
        }
        let ciphertext: Vec<u8> = items[0].clone().try_into()?;
        let nonce: Nonce = items[1].clone().try_into()?;
        let aad: Vec<u8> = items[2].clone().try_into()?;
        Ok(Self { ciphertext, nonce, aad })
    }
}

impl From<EncryptedMessage> for CBOR {
    fn from(value: EncryptedMessage) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for EncryptedMessage {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
