use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};

use crate::{Error, RandomNumberGenerator};

pub const KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;

/// IETF ChaCha20-Poly1305 AEAD encryption: 256-bit key, 96-bit nonce,
/// variable associated data, 128-bit authentication tag appended to the
/// ciphertext.
pub fn aead_chacha20_poly1305_encrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    plaintext: &[u8],
    aad: &[u8],
) -> Vec<u8> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(nonce), Payload { msg: plaintext, aad })
        .expect("ChaCha20-Poly1305 encryption does not fail")
}

pub fn aead_chacha20_poly1305_decrypt(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    ciphertext: &[u8],
    aad: &[u8],
) -> crate::Result<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext, aad })
        .map_err(|_| Error::AeadAuthentication)
}

pub fn random_nonce(rng: &mut impl RandomNumberGenerator) -> [u8; NONCE_SIZE] {
    rng.random_array()
}
