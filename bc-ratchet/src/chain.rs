//! Symmetric-key-ratchet derivation: stepping a chain key forward produces
//! both the next chain key and a one-time message key, via two distinct
//! HMAC-SHA-256 keyed-PRF applications over fixed single-byte seeds.

use crate::constants::{CHAIN_KEY_SEED, HKDF_INFO_MESSAGE_KEYS, MESSAGE_KEY_SEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainKey {
    pub key: [u8; 32],
    pub index: u32,
}

impl ChainKey {
    pub fn new(key: [u8; 32]) -> Self {
        Self { key, index: 0 }
    }

    /// Derives this chain's current message key and the chain key that
    /// replaces it, advancing `index` by one.
    pub fn ratchet(&self) -> (MessageKey, ChainKey) {
        let message_seed = bc_crypto::hmac_sha256(&self.key, &MESSAGE_KEY_SEED);
        let next_key = bc_crypto::hmac_sha256(&self.key, &CHAIN_KEY_SEED);
        (
            MessageKey { seed: message_seed, counter: self.index },
            ChainKey { key: next_key, index: self.index + 1 },
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageKey {
    pub seed: [u8; 32],
    pub counter: u32,
}

/// The cipher key, MAC key, and IV an AEAD send/receive derives from one
/// message key, via HKDF expansion the same way X3DH derives its root
/// triad (salt-less, fixed info string, fixed output length).
pub struct MessageKeyMaterial {
    pub cipher_key: [u8; 32],
    pub mac_key: [u8; 32],
    pub iv: [u8; 16],
}

impl MessageKey {
    pub fn derive_material(&self) -> bc_crypto::Result<MessageKeyMaterial> {
        let okm = bc_crypto::hkdf_sha256(&[0u8; 32], &self.seed, HKDF_INFO_MESSAGE_KEYS, 80)?;
        let mut cipher_key = [0u8; 32];
        let mut mac_key = [0u8; 32];
        let mut iv = [0u8; 16];
        cipher_key.copy_from_slice(&okm[0..32]);
        mac_key.copy_from_slice(&okm[32..64]);
        iv.copy_from_slice(&okm[64..80]);
        Ok(MessageKeyMaterial { cipher_key, mac_key, iv })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratchet_advances_index_and_changes_key() {
        let chain = ChainKey::new([1u8; 32]);
        let (message_key, next_chain) = chain.ratchet();
        assert_eq!(message_key.counter, 0);
        assert_eq!(next_chain.index, 1);
        assert_ne!(next_chain.key, chain.key);
    }

    #[test]
    fn same_chain_key_derives_same_message_key() {
        let a = ChainKey::new([9u8; 32]);
        let b = ChainKey::new([9u8; 32]);
        assert_eq!(a.ratchet().0.seed, b.ratchet().0.seed);
    }

    #[test]
    fn message_key_material_is_deterministic() {
        let (message_key, _) = ChainKey::new([3u8; 32]).ratchet();
        let a = message_key.derive_material().unwrap();
        let b = message_key.derive_material().unwrap();
        assert_eq!(a.cipher_key, b.cipher_key);
        assert_eq!(a.mac_key, b.mac_key);
        assert_eq!(a.iv, b.iv);
    }
}
