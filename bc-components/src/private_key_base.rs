use dcbor::prelude::*;

use crate::agreement_key::AgreementPrivateKey;
use crate::error::Result;
use crate::keys::PrivateKeys;
use crate::signing_key::SigningPrivateKey;
use crate::tags::TAG_PRIVATE_KEY_BASE;

const SIGNING_INFO: &[u8] = b"signing";
const AGREEMENT_INFO: &[u8] = b"agreement";

/// A seed of key material from which an identity's signing and agreement
/// private keys are both deterministically derived via HKDF-SHA-256, so a
/// single secret need be backed up to recover the whole inception key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeyBase {
    data: Vec<u8>,
}

impl PrivateKeyBase {
    pub fn new_random() -> Self {
        use bc_crypto::RandomNumberGenerator;
        let mut rng = bc_crypto::SecureRandomNumberGenerator;
        Self { data: rng.random_bytes(32) }
    }

    pub fn from_data(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn signing_private_key(&self) -> Result<SigningPrivateKey> {
        let derived = bc_crypto::hkdf_sha256(b"", &self.data, SIGNING_INFO, 32)?;
        Ok(SigningPrivateKey::from_schnorr_bytes(derived))
    }

    pub fn agreement_private_key(&self) -> Result<AgreementPrivateKey> {
        let derived = bc_crypto::hkdf_sha256(b"", &self.data, AGREEMENT_INFO, 32)?;
        Ok(AgreementPrivateKey::from_x25519_bytes(derived))
    }

    pub fn private_keys(&self) -> Result<PrivateKeys> {
        Ok(PrivateKeys::new(self.signing_private_key()?, self.agreement_private_key()?))
    }
}

impl CBORTagged for PrivateKeyBase {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_PRIVATE_KEY_BASE, "crypto-prvkey-base")]
    }
}

impl CBORTaggedEncodable for PrivateKeyBase {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::to_byte_string(&self.data)
    }
}

impl CBORTaggedDecodable for PrivateKeyBase {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let data: Vec<u8> = cbor.clone().try_into()?;
        Ok(Self { data })
    }
}

impl From<PrivateKeyBase> for CBOR {
    fn from(value: PrivateKeyBase) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for PrivateKeyBase {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let base = PrivateKeyBase::from_data(vec![7u8; 32]);
        let a = base.private_keys().unwrap();
        let b = base.private_keys().unwrap();
        assert_eq!(a.signing_private_key().data(), b.signing_private_key().data());
        assert_eq!(a.agreement_private_key().data(), b.agreement_private_key().data());
    }

    #[test]
    fn different_bases_derive_different_keys() {
        let a = PrivateKeyBase::from_data(vec![1u8; 32]).private_keys().unwrap();
        let b = PrivateKeyBase::from_data(vec![2u8; 32]).private_keys().unwrap();
        assert_ne!(a.signing_private_key().data(), b.signing_private_key().data());
    }

    #[test]
    fn cbor_round_trip() {
        let base = PrivateKeyBase::new_random();
        let cbor: CBOR = base.clone().into();
        let parsed: PrivateKeyBase = cbor.try_into().unwrap();
        assert_eq!(parsed, base);
    }
}
