use k256::ecdsa::signature::{Signer as _, Verifier as _};
use k256::schnorr::signature::{Signer as _, Verifier as _};

use crate::{Error, RandomNumberGenerator};

pub const PRIVATE_KEY_SIZE: usize = 32;
pub const ECDSA_PUBLIC_KEY_SIZE: usize = 33;
pub const ECDSA_SIGNATURE_SIZE: usize = 64;
pub const SCHNORR_PUBLIC_KEY_SIZE: usize = 32;
pub const SCHNORR_SIGNATURE_SIZE: usize = 64;

pub fn secp256k1_new_private_key(
    rng: &mut impl RandomNumberGenerator,
) -> [u8; PRIVATE_KEY_SIZE] {
    rng.random_array()
}

pub fn ecdsa_public_key_from_private(
    private: &[u8; PRIVATE_KEY_SIZE],
) -> crate::Result<[u8; ECDSA_PUBLIC_KEY_SIZE]> {
    let signing_key =
        k256::ecdsa::SigningKey::from_bytes(private.into()).map_err(|_| Error::InvalidPublicKey)?;
    let point = signing_key.verifying_key().to_encoded_point(true);
    let mut out = [0u8; ECDSA_PUBLIC_KEY_SIZE];
    out.copy_from_slice(point.as_bytes());
    Ok(out)
}

/// Deterministic (RFC 6979) ECDSA signing over secp256k1.
pub fn ecdsa_sign(
    private: &[u8; PRIVATE_KEY_SIZE],
    message: &[u8],
) -> crate::Result<[u8; ECDSA_SIGNATURE_SIZE]> {
    let signing_key =
        k256::ecdsa::SigningKey::from_bytes(private.into()).map_err(|_| Error::InvalidPublicKey)?;
    let signature: k256::ecdsa::Signature = signing_key.sign(message);
    Ok(signature.to_bytes().into())
}

pub fn ecdsa_verify(
    public: &[u8; ECDSA_PUBLIC_KEY_SIZE],
    signature: &[u8; ECDSA_SIGNATURE_SIZE],
    message: &[u8],
) -> crate::Result<()> {
    let verifying_key =
        k256::ecdsa::VerifyingKey::from_sec1_bytes(public).map_err(|_| Error::InvalidPublicKey)?;
    let signature =
        k256::ecdsa::Signature::from_slice(signature).map_err(|_| Error::InvalidSignature)?;
    verifying_key.verify(message, &signature).map_err(|_| Error::InvalidSignature)
}

/// BIP-340 Schnorr signing over secp256k1 (x-only public keys).
pub fn schnorr_public_key_from_private(
    private: &[u8; PRIVATE_KEY_SIZE],
) -> crate::Result<[u8; SCHNORR_PUBLIC_KEY_SIZE]> {
    let signing_key =
        k256::schnorr::SigningKey::from_bytes(private).map_err(|_| Error::InvalidPublicKey)?;
    Ok(signing_key.verifying_key().to_bytes().into())
}

pub fn schnorr_sign(
    private: &[u8; PRIVATE_KEY_SIZE],
    message: &[u8],
) -> crate::Result<[u8; SCHNORR_SIGNATURE_SIZE]> {
    let signing_key =
        k256::schnorr::SigningKey::from_bytes(private).map_err(|_| Error::InvalidPublicKey)?;
    let signature: k256::schnorr::Signature = signing_key.sign(message);
    Ok(signature.to_bytes())
}

pub fn schnorr_verify(
    public: &[u8; SCHNORR_PUBLIC_KEY_SIZE],
    signature: &[u8; SCHNORR_SIGNATURE_SIZE],
    message: &[u8],
) -> crate::Result<()> {
    let verifying_key =
        k256::schnorr::VerifyingKey::from_bytes(public).map_err(|_| Error::InvalidPublicKey)?;
    let signature =
        k256::schnorr::Signature::try_from(signature.as_slice()).map_err(|_| Error::InvalidSignature)?;
    verifying_key.verify(message, &signature).map_err(|_| Error::InvalidSignature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::TestRandomNumberGenerator;

    #[test]
    fn ecdsa_sign_and_verify() {
        let mut rng = TestRandomNumberGenerator::new_with_seed(11);
        let private = secp256k1_new_private_key(&mut rng);
        let public = ecdsa_public_key_from_private(&private).unwrap();
        let signature = ecdsa_sign(&private, b"hello").unwrap();
        assert!(ecdsa_verify(&public, &signature, b"hello").is_ok());
    }

    #[test]
    fn schnorr_sign_and_verify() {
        let mut rng = TestRandomNumberGenerator::new_with_seed(12);
        let private = secp256k1_new_private_key(&mut rng);
        let public = schnorr_public_key_from_private(&private).unwrap();
        let signature = schnorr_sign(&private, b"hello").unwrap();
        assert!(schnorr_verify(&public, &signature, b"hello").is_ok());
    }
}
