use dcbor::prelude::*;

use crate::error::{Error, Result};
use crate::tags::{TAG_X25519_PRIVATE_KEY, TAG_X25519_PUBLIC_KEY};

/// The closed set of key-agreement/KEM schemes. `X25519` is the default
/// scheme (bare bytes); the ML-KEM variants carry an explicit
/// discriminator, per the same convention as [`crate::SigningScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgreementScheme {
    X25519,
    MlKem512,
    MlKem768,
    MlKem1024,
}

impl AgreementScheme {
    fn discriminator(self) -> Option<u8> {
        match self {
            AgreementScheme::X25519 => None,
            AgreementScheme::MlKem512 => Some(1),
            AgreementScheme::MlKem768 => Some(2),
            AgreementScheme::MlKem1024 => Some(3),
        }
    }

    fn from_discriminator(value: Option<u8>) -> Result<Self> {
        Ok(match value {
            None | Some(0) => AgreementScheme::X25519,
            Some(1) => AgreementScheme::MlKem512,
            Some(2) => AgreementScheme::MlKem768,
            Some(3) => AgreementScheme::MlKem1024,
            Some(other) => return Err(Error::UnknownDiscriminator(other, "AgreementScheme")),
        })
    }
}

fn encode_agreement_bytes(scheme: AgreementScheme, bytes: &[u8]) -> CBOR {
    match scheme.discriminator() {
        None => CBOR::to_byte_string(bytes),
        Some(d) => vec![CBOR::from(d), CBOR::to_byte_string(bytes)].into(),
    }
}

fn decode_agreement_bytes(cbor: &CBOR) -> dcbor::Result<(AgreementScheme, Vec<u8>)> {
    match cbor.as_case() {
        CBORCase::ByteString(_) => {
            let bytes: Vec<u8> = cbor.clone().try_into()?;
            Ok((AgreementScheme::X25519, bytes))
        }
        CBORCase::Array(items) if items.len() == 2 => {
            let discriminator: u8 = items[0].clone().try_into()?;
            let bytes: Vec<u8> = items[1].clone().try_into()?;
            let scheme = AgreementScheme::from_discriminator(Some(discriminator))
                .map_err(|e| dcbor::Error::Custom(e.to_string()))?;
            Ok((scheme, bytes))
        }
        _ => Err(dcbor::Error::WrongType),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgreementPrivateKey {
    scheme: AgreementScheme,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgreementPublicKey {
    scheme: AgreementScheme,
    bytes: Vec<u8>,
}

impl AgreementPrivateKey {
    pub fn new_x25519() -> Self {
        let mut rng = bc_crypto::SecureRandomNumberGenerator;
        let private: [u8; 32] = bc_crypto::RandomNumberGenerator::random_array(&mut rng);
        Self { scheme: AgreementScheme::X25519, bytes: private.to_vec() }
    }

    /// Builds an X25519 private key from already-derived bytes (e.g. from
    /// [`crate::PrivateKeyBase`]) rather than generating new randomness.
    pub fn from_x25519_bytes(bytes: Vec<u8>) -> Self {
        Self { scheme: AgreementScheme::X25519, bytes }
    }

    pub fn scheme(&self) -> AgreementScheme {
        self.scheme
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    pub fn public_key(&self) -> AgreementPublicKey {
        match self.scheme {
            AgreementScheme::X25519 => {
                let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
                let public = bc_crypto::x25519_public_key(&private);
                AgreementPublicKey { scheme: self.scheme, bytes: public.to_vec() }
            }
            _ => AgreementPublicKey { scheme: self.scheme, bytes: self.bytes.clone() },
        }
    }

    pub fn shared_secret(&self, their_public: &AgreementPublicKey) -> Result<[u8; 32]> {
        if self.scheme != AgreementScheme::X25519 || their_public.scheme != AgreementScheme::X25519 {
            return Err(Error::SchemeMismatch);
        }
        let private: [u8; 32] = self.bytes.clone().try_into().unwrap();
        let public: [u8; 32] = their_public
            .bytes
            .clone()
            .try_into()
            .map_err(|_| Error::InvalidLength(32, their_public.bytes.len()))?;
        Ok(bc_crypto::x25519_shared_secret(&private, &public)?)
    }
}

impl AgreementPublicKey {
    pub fn scheme(&self) -> AgreementScheme {
        self.scheme
    }

    pub fn data(&self) -> &[u8] {
        &self.bytes
    }

    pub fn from_scheme_and_bytes(scheme: AgreementScheme, bytes: Vec<u8>) -> Self {
        Self { scheme, bytes }
    }
}

impl CBORTagged for AgreementPrivateKey {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_X25519_PRIVATE_KEY, "agreement-private-key")]
    }
}

impl CBORTaggedEncodable for AgreementPrivateKey {
    fn untagged_cbor(&self) -> CBOR {
        encode_agreement_bytes(self.scheme, &self.bytes)
    }
}

impl CBORTaggedDecodable for AgreementPrivateKey {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let (scheme, bytes) = decode_agreement_bytes(cbor)?;
        Ok(Self { scheme, bytes })
    }
}

impl From<AgreementPrivateKey> for CBOR {
    fn from(value: AgreementPrivateKey) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for AgreementPrivateKey {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

impl CBORTagged for AgreementPublicKey {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_X25519_PUBLIC_KEY, "agreement-public-key")]
    }
}

impl CBORTaggedEncodable for AgreementPublicKey {
    fn untagged_cbor(&self) -> CBOR {
        encode_agreement_bytes(self.scheme, &self.bytes)
    }
}

impl CBORTaggedDecodable for AgreementPublicKey {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let (scheme, bytes) = decode_agreement_bytes(cbor)?;
        Ok(Self { scheme, bytes })
    }
}

impl From<AgreementPublicKey> for CBOR {
    fn from(value: AgreementPublicKey) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for AgreementPublicKey {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
