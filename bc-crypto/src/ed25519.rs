use ed25519_dalek::{Signer, Verifier};

use crate::{Error, RandomNumberGenerator};

pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 64;

pub fn ed25519_new_private_key(rng: &mut impl RandomNumberGenerator) -> [u8; PRIVATE_KEY_SIZE] {
    rng.random_array()
}

pub fn ed25519_public_key_from_private(
    private: &[u8; PRIVATE_KEY_SIZE],
) -> [u8; PUBLIC_KEY_SIZE] {
    let signing_key = ed25519_dalek::SigningKey::from_bytes(private);
    signing_key.verifying_key().to_bytes()
}

pub fn ed25519_sign(
    private: &[u8; PRIVATE_KEY_SIZE],
    message: &[u8],
) -> [u8; SIGNATURE_SIZE] {
    let signing_key = ed25519_dalek::SigningKey::from_bytes(private);
    signing_key.sign(message).to_bytes()
}

pub fn ed25519_verify(
    public: &[u8; PUBLIC_KEY_SIZE],
    signature: &[u8; SIGNATURE_SIZE],
    message: &[u8],
) -> crate::Result<()> {
    let verifying_key =
        ed25519_dalek::VerifyingKey::from_bytes(public).map_err(|_| Error::InvalidPublicKey)?;
    let signature = ed25519_dalek::Signature::from_bytes(signature);
    verifying_key
        .verify(message, &signature)
        .map_err(|_| Error::InvalidSignature)
}
