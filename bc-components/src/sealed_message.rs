use dcbor::prelude::*;

use crate::agreement_key::{AgreementPrivateKey, AgreementPublicKey};
use crate::error::Result;
use crate::nonce::Nonce;
use crate::tags::TAG_SEALED_MESSAGE;

const INFO: &[u8] = b"SealedMessage";

/// A message encrypted to a recipient's agreement public key using an
/// ephemeral X25519 keypair: no long-term key of the sender's is needed or
/// revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    ciphertext: Vec<u8>,
    nonce: Nonce,
    ephemeral_public_key: AgreementPublicKey,
}

impl SealedMessage {
    pub fn new(plaintext: &[u8], recipient: &AgreementPublicKey, aad: &[u8]) -> Result<Self> {
        let ephemeral = AgreementPrivateKey::new_x25519();
        let shared = ephemeral.shared_secret(recipient)?;
        let key = Self::derive_key(&shared, &ephemeral.public_key(), recipient)?;
        let nonce = Nonce::new_random();
        let ciphertext =
            bc_crypto::aead_chacha20_poly1305_encrypt(&key, nonce.data(), plaintext, aad);
        Ok(Self { ciphertext, nonce, ephemeral_public_key: ephemeral.public_key() })
    }

    pub fn decrypt(&self, recipient_private: &AgreementPrivateKey, aad: &[u8]) -> Result<Vec<u8>> {
        let shared = recipient_private.shared_secret(&self.ephemeral_public_key)?;
        let key = Self::derive_key(
            &shared,
            &self.ephemeral_public_key,
            &recipient_private.public_key(),
        )?;
        let plaintext = bc_crypto::aead_chacha20_poly1305_decrypt(
            &key,
            self.nonce.data(),
            &self.ciphertext,
            aad,
        )?;
        Ok(plaintext)
    }

    fn derive_key(
        shared: &[u8; 32],
        ephemeral_public: &AgreementPublicKey,
        recipient_public: &AgreementPublicKey,
    ) -> Result<[u8; 32]> {
        let mut salt = Vec::with_capacity(64);
        salt.extend_from_slice(ephemeral_public.data());
        salt.extend_from_slice(recipient_public.data());
        let derived = bc_crypto::hkdf_sha256(&salt, shared, INFO, 32)?;
        let mut key = [0u8; 32];
        key.copy_from_slice(&derived);
        Ok(key)
    }

    pub fn ephemeral_public_key(&self) -> &AgreementPublicKey {
        &self.ephemeral_public_key
    }
}

impl CBORTagged for SealedMessage {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_SEALED_MESSAGE, "crypto-sealed")]
    }
}

impl CBORTaggedEncodable for SealedMessage {
    fn untagged_cbor(&self) -> CBOR {
        vec![
            CBOR::to_byte_string(&self.ciphertext),
            CBOR::from(self.nonce),
            self.ephemeral_public_key.clone().into(),
        ]
        .into()
    }
}

impl CBORTaggedDecodable for SealedMessage {
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
        let ephemeral_public_key: AgreementPublicKey = items[2].clone().try_into()?;
        Ok(Self { ciphertext, nonce, ephemeral_public_key })
    }
}

impl From<SealedMessage> for CBOR {
    fn from(value: SealedMessage) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for SealedMessage {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seals_and_opens_round_trip() {
        let recipient = AgreementPrivateKey::new_x25519();
        let message = SealedMessage::new(b"attack at dawn", &recipient.public_key(), b"").unwrap();
        let opened = message.decrypt(&recipient, b"").unwrap();
        assert_eq!(opened, b"attack at dawn");
    }

    #[test]
    fn wrong_recipient_fails_to_open() {
        let recipient = AgreementPrivateKey::new_x25519();
        let impostor = AgreementPrivateKey::new_x25519();
        let message = SealedMessage::new(b"attack at dawn", &recipient.public_key(), b"").unwrap();
        assert!(message.decrypt(&impostor, b"").is_err());
    }

    #[test]
    fn cbor_round_trip() {
        let recipient = AgreementPrivateKey::new_x25519();
        let message = SealedMessage::new(b"payload", &recipient.public_key(), b"aad").unwrap();
        let cbor: CBOR = message.clone().into();
        let parsed: SealedMessage = cbor.try_into().unwrap();
        assert_eq!(parsed, message);
        assert_eq!(parsed.decrypt(&recipient, b"aad").unwrap(), b"payload");
    }
}
