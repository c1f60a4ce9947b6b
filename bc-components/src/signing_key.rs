use dcbor::prelude::*;

use crate::error::{Error, Result};
use crate::signature::Signature;
use crate::tags::{TAG_SIGNING_PRIVATE_KEY, TAG_SIGNING_PUBLIC_KEY};

/// The closed set of signing schemes a key or signature can carry.
/// `Schnorr` is the default scheme: it encodes as a bare byte string with
/// no discriminator, the way every other non-default scheme's
/// `[discriminator, bytes]` pair collapses to plain bytes for the common
/// case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningScheme {
    Schnorr,
    Ecdsa,
    Ed25519,
    Sr25519,
    MlDsa44,
    MlDsa65,
    MlDsa87,
    SshEd25519,
    SshDsa,
    SshEcdsaP256,
    SshEcdsaP384,
}

impl SigningScheme {
    fn discriminator(self) -> Option<u8> {
        match self {
            SigningScheme::Schnorr => None,
            SigningScheme::Ecdsa => Some(1),
            SigningScheme::Ed25519 => Some(2),
            SigningScheme::Sr25519 => Some(3),
            SigningScheme::MlDsa44 => Some(4),
            SigningScheme::MlDsa65 => Some(5),
            SigningScheme::MlDsa87 => Some(6),
            SigningScheme::SshEd25519 => Some(7),
            SigningScheme::SshDsa => Some(8),
            SigningScheme::SshEcdsaP256 => Some(9),
            SigningScheme::SshEcdsaP384 => Some(10),
        }
    }

    fn from_discriminator(value: Option<u8>) -> Result<Self> {
        Ok(match value {
            None => SigningScheme::Schnorr,
            Some(1) => SigningScheme::Ecdsa,
            Some(2) => SigningScheme::Ed25519,
            Some(3) => SigningScheme::Sr25519,
            Some(4) => SigningScheme::MlDsa44,
            Some(5) => SigningScheme::MlDsa65,
            Some(6) => SigningScheme::MlDsa87,
            Some(7) => SigningScheme::SshEd25519,
            Some(8) => SigningScheme::SshDsa,
            Some(9) => SigningScheme::SshEcdsaP256,
            Some(10) => SigningScheme::SshEcdsaP384,
            Some(other) => return Err(Error::UnknownDiscriminator(other, "SigningScheme")),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningPrivateKey {
    scheme: SigningScheme,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SigningPublicKey {
    scheme: SigningScheme,
    bytes: Vec<u8>,
}

impl SigningPrivateKey {
    pub fn new_ed25519() -> Self {
        let mut rng = bc_crypto::SecureRandomNumberGenerator;
        Self::new_ed25519_with_rng(&mut rng)
    }

    pub fn new_ed25519_with_rng(rng: &mut dyn bc_crypto::RandomNumberGenerator) -> Self {
        let private = bc_crypto::ed25519_new_private_key(&mut RngAdapter(rng));
        Self { scheme: SigningScheme::Ed25519, bytes: private.to_vec() }
    }

    pub fn new_schnorr() -> Self {
        let mut rng = bc_crypto::SecureRandomNumberGenerator;
        Self::new_schnorr_with_rng(&mut rng)
    }

    pub fn new_schnorr_with_rng(rng: &mut dyn bc_crypto::RandomNumberGenerator) -> Self {
        let private = bc_crypto::secp256k1_new_private_key(&mut RngAdapter(rng));
        Self { scheme: SigningScheme::Schnorr, bytes: private.to_vec() }
    }

    pub fn new_ecdsa() -> Self {
        let mut rng = bc_crypto::SecureRandomNumberGenerator;
        let private = bc_crypto::secp256k1_new_private_key(&mut rng);
        Self { scheme: SigningScheme::Ecdsa, bytes: private.to_vec() }
    }

    /// Builds a Schnorr private key from already-derived bytes (e.g. from
    /// [`crate::PrivateKeyBase`]) rather than generating new randomness.
    pub fn from_schnorr_bytes(bytes: Vec<u8>) -> Self {
        Self { scheme: SigningScheme::Schnorr, bytes }
    }

    pub fn scheme(&self) -> SigningScheme {
        self.scheme
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    pub fn public_key(&self) -> SigningPublicKey {
        let bytes = match self.scheme {
            SigningScheme::Ed25519 => {
                let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
                bc_crypto::ed25519_public_key_from_private(&private).to_vec()
            }
            SigningScheme::Schnorr => {
                let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
                bc_crypto::schnorr_public_key_from_private(&private).unwrap().to_vec()
            }
            SigningScheme::Ecdsa => {
                let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
                bc_crypto::ecdsa_public_key_from_private(&private).unwrap().to_vec()
            }
            _ => self.bytes.clone(),
        };
        SigningPublicKey { scheme: self.scheme, bytes }
    }

    pub fn sign(&self, message: &[u8]) -> Result<Signature> {
        let bytes = match self.scheme {
            SigningScheme::Ed25519 => {
                let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
                bc_crypto::ed25519_sign(&private, message).to_vec()
            }
            SigningScheme::Schnorr => {
                let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
                bc_crypto::schnorr_sign(&private, message)?.to_vec()
            }
            SigningScheme::Ecdsa => {
                let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
                bc_crypto::ecdsa_sign(&private, message)?.to_vec()
            }
            _ => return Err(Error::UnknownDiscriminator(0, "unsupported signing scheme")),
        };
        Ok(Signature::new(self.scheme, bytes))
    }
}

impl SigningPublicKey {
    pub fn scheme(&self) -> SigningScheme {
        self.scheme
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    pub fn from_scheme_and_bytes(scheme: SigningScheme, bytes: Vec<u8>) -> Self {
        Self { scheme, bytes }
    }

    pub fn verify(&self, signature: &Signature, message: &[u8]) -> Result<()> {
        if signature.scheme() != self.scheme {
            return Err(Error::SchemeMismatch);
        }
        match self.scheme {
            SigningScheme::Ed25519 => {
                let public: [u8; 32] = self.bytes.clone().try_into().unwrap();
                let sig: [u8; 64] = signature.data().to_vec().try_into().unwrap();
                Ok(bc_crypto::ed25519_verify(&public, &sig, message)?)
            }
            SigningScheme::Schnorr => {
                let public: [u8; 32] = self.bytes.clone().try_into().unwrap();
                let sig: [u8; 64] = signature.data().to_vec().try_into().unwrap();
                Ok(bc_crypto::schnorr_verify(&public, &sig, message)?)
            }
            SigningScheme::Ecdsa => {
                let public: [u8; 33] = self.bytes.clone().try_into().unwrap();
                let sig: [u8; 64] = signature.data().to_vec().try_into().unwrap();
                Ok(bc_crypto::ecdsa_verify(&public, &sig, message)?)
            }
            _ => Err(Error::UnknownDiscriminator(0, "unsupported signing scheme")),
        }
    }
}

/// Adapts this crate's `&mut dyn RandomNumberGenerator` to the `impl
/// RandomNumberGenerator` bound `bc_crypto`'s key-generation functions take.
struct RngAdapter<'a>(&'a mut dyn bc_crypto::RandomNumberGenerator);

impl bc_crypto::RandomNumberGenerator for RngAdapter<'_> {
    fn random_bytes(&mut self, len: usize) -> Vec<u8> {
        self.0.random_bytes(len)
    }
}

pub(crate) fn encode_signature_bytes(scheme: SigningScheme, bytes: &[u8]) -> CBOR {
    match scheme.discriminator() {
        None => CBOR::to_byte_string(bytes),
        Some(d) => vec![CBOR::from(d), CBOR::to_byte_string(bytes)].into(),
    }
}

pub(crate) fn decode_signature_bytes(cbor: &CBOR) -> dcbor::Result<(SigningScheme, Vec<u8>)> {
    match cbor.as_case() {
        CBORCase::ByteString(_) => {
            let bytes: Vec<u8> = cbor.clone().try_into()?;
            Ok((SigningScheme::Schnorr, bytes))
        }
        CBORCase::Array(items) if items.len() == 2 => {
            let discriminator: u8 = items[0].clone().try_into()?;
            let bytes: Vec<u8> = items[1].clone().try_into()?;
            let scheme = SigningScheme::from_discriminator(Some(discriminator))
                .map_err(|e| dcbor::Error::Custom(e.to_string()))?;
            Ok((scheme, bytes))
        }
        _ => Err(dcbor::Error::WrongType),
    }
}

impl CBORTagged for SigningPrivateKey {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_SIGNING_PRIVATE_KEY, "signing-private-key")]
    }
}

impl CBORTaggedEncodable for SigningPrivateKey {
    fn untagged_cbor(&self) -> CBOR {
        encode_signature_bytes(self.scheme, &self.bytes)
    }
}

impl CBORTaggedDecodable for SigningPrivateKey {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let (scheme, bytes) = decode_signature_bytes(cbor)?;
        Ok(Self { scheme, bytes })
    }
}

impl From<SigningPrivateKey> for CBOR {
    fn from(value: SigningPrivateKey) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for SigningPrivateKey {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

impl CBORTagged for SigningPublicKey {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_SIGNING_PUBLIC_KEY, "signing-public-key")]
    }
}

impl CBORTaggedEncodable for SigningPublicKey {
    fn untagged_cbor(&self) -> CBOR {
        encode_signature_bytes(self.scheme, &self.bytes)
    }
}

impl CBORTaggedDecodable for SigningPublicKey {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let (scheme, bytes) = decode_signature_bytes(cbor)?;
        Ok(Self { scheme, bytes })
    }
}

impl From<SigningPublicKey> for CBOR {
    fn from(value: SigningPublicKey) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for SigningPublicKey {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
