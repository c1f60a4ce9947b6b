use dcbor::prelude::*;

use crate::byte_newtype::fixed_width_byte_type;
use crate::tags::TAG_SYMMETRIC_KEY;

fixed_width_byte_type!(SymmetricKey, 32, TAG_SYMMETRIC_KEY, "crypto-key");

impl SymmetricKey {
    /// AEAD-encrypts `plaintext` under this key, returning the
    /// [`crate::EncryptedMessage`] (fresh random nonce, caller-supplied
    /// associated data).
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        aad: &[u8],
    ) -> crate::EncryptedMessage {
        let nonce = crate::Nonce::new_random();
        self.encrypt_with_nonce(plaintext, aad, nonce)
    }

    pub fn encrypt_with_nonce(
        &self,
        plaintext: &[u8],
        aad: &[u8],
        nonce: crate::Nonce,
    ) -> crate::EncryptedMessage {
        let ciphertext = bc_crypto::aead_chacha20_poly1305_encrypt(
            self.data(),
            nonce.data(),
            plaintext,
            aad,
        );
        crate::EncryptedMessage::new(ciphertext, nonce, aad.to_vec())
    }

    pub fn decrypt(&self, message: &crate::EncryptedMessage) -> crate::Result<Vec<u8>> {
        Ok(bc_crypto::aead_chacha20_poly1305_decrypt(
            self.data(),
            message.nonce().data(),
            message.ciphertext(),
            message.aad(),
        )?)
    }
}
