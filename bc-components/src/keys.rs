use dcbor::prelude::*;

use crate::agreement_key::AgreementPublicKey;
use crate::signing_key::SigningPublicKey;
use crate::tags::{TAG_PRIVATE_KEYS, TAG_PUBLIC_KEYS};
use crate::xid::XID;

/// The public half of an identity's inception key set: a signing key for
/// authentication and an agreement key for receiving sealed messages.
/// [`crate::XID::from_inception_keys`] digests this container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKeys {
    signing_public_key: SigningPublicKey,
    agreement_public_key: AgreementPublicKey,
}

impl PublicKeys {
    pub fn new(signing_public_key: SigningPublicKey, agreement_public_key: AgreementPublicKey) -> Self {
        Self { signing_public_key, agreement_public_key }
    }

    pub fn signing_public_key(&self) -> &SigningPublicKey {
        &self.signing_public_key
    }

    pub fn agreement_public_key(&self) -> &AgreementPublicKey {
        &self.agreement_public_key
    }

    pub fn xid(&self) -> XID {
        XID::from_inception_keys(self)
    }
}

/// The private half of an identity's inception key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKeys {
    signing_private_key: crate::signing_key::SigningPrivateKey,
    agreement_private_key: crate::agreement_key::AgreementPrivateKey,
}

impl PrivateKeys {
    pub fn new(
        signing_private_key: crate::signing_key::SigningPrivateKey,
        agreement_private_key: crate::agreement_key::AgreementPrivateKey,
    ) -> Self {
        Self { signing_private_key, agreement_private_key }
    }

    pub fn signing_private_key(&self) -> &crate::signing_key::SigningPrivateKey {
        &self.signing_private_key
    }

    pub fn agreement_private_key(&self) -> &crate::agreement_key::AgreementPrivateKey {
        &self.agreement_private_key
    }

    pub fn public_keys(&self) -> PublicKeys {
        PublicKeys::new(
            self.signing_private_key.public_key(),
            self.agreement_private_key.public_key(),
        )
    }
}

impl CBORTagged for PublicKeys {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_PUBLIC_KEYS, "crypto-pubkeys")]
    }
}

impl CBORTaggedEncodable for PublicKeys {
    fn untagged_cbor(&self) -> CBOR {
        vec![
            self.signing_public_key.clone().into(),
            self.agreement_public_key.clone().into(),
        ]
        .into()
    }
}

impl CBORTaggedDecodable for PublicKeys {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let items: Vec<CBOR> = match cbor.as_case() {
            CBORCase::Array(items) => items.clone(),
            _ => return Err(dcbor::Error::WrongType),
        };
        if items.len() != 2 {
            return Err(dcbor::Error::WrongType);
        }
        let signing_public_key: SigningPublicKey = items[0].clone().try_into()?;
        let agreement_public_key: AgreementPublicKey = items[1].clone().try_into()?;
        Ok(Self { signing_public_key, agreement_public_key })
    }
}

impl From<PublicKeys> for CBOR {
    fn from(value: PublicKeys) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for PublicKeys {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

impl CBORTagged for PrivateKeys {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_PRIVATE_KEYS, "crypto-prvkeys")]
    }
}

impl CBORTaggedEncodable for PrivateKeys {
    fn untagged_cbor(&self) -> CBOR {
        vec![
            self.signing_private_key.clone().into(),
            self.agreement_private_key.clone().into(),
        ]
        .into()
    }
}

impl CBORTaggedDecodable for PrivateKeys {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let items: Vec<CBOR> = match cbor.as_case() {
            CBORCase::Array(items) => items.clone(),
            _ => return Err(dcbor::Error::WrongType),
        };
        if items.len() != 2 {
            return Err(dcbor::Error::WrongType);
        }
        let signing_private_key = items[0].clone().try_into()?;
        let agreement_private_key = items[1].clone().try_into()?;
        Ok(Self { signing_private_key, agreement_private_key })
    }
}

impl From<PrivateKeys> for CBOR {
    fn from(value: PrivateKeys) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for PrivateKeys {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agreement_key::AgreementPrivateKey;
    use crate::signing_key::SigningPrivateKey;

    #[test]
    fn xid_stable_across_repeated_derivation() {
        let private = PrivateKeys::new(
            SigningPrivateKey::new_schnorr(),
            AgreementPrivateKey::new_x25519(),
        );
        let public = private.public_keys();
        assert_eq!(public.xid(), public.xid());
    }

    #[test]
    fn public_keys_cbor_round_trip() {
        let private = PrivateKeys::new(
            SigningPrivateKey::new_ed25519(),
            AgreementPrivateKey::new_x25519(),
        );
        let public = private.public_keys();
        let cbor: CBOR = public.clone().into();
        let parsed: PublicKeys = cbor.try_into().unwrap();
        assert_eq!(parsed, public);
    }
}
