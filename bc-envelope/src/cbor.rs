use bc_components::{Compressed, Digest, EncryptedMessage};
use bc_known_values::KnownValue;
use dcbor::prelude::*;

use crate::envelope::{Case, Envelope};
use crate::error::Error;
use crate::tags::TAG_ENVELOPE;

const CASE_LEAF: u8 = 0;
const CASE_KNOWN_VALUE: u8 = 1;
const CASE_WRAPPED: u8 = 2;
const CASE_NODE: u8 = 3;
const CASE_ASSERTION: u8 = 4;
const CASE_ELIDED: u8 = 5;
const CASE_ENCRYPTED: u8 = 6;
const CASE_COMPRESSED: u8 = 7;

impl CBORTagged for Envelope {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_ENVELOPE, "envelope")]
    }
}

impl CBORTaggedEncodable for Envelope {
    fn untagged_cbor(&self) -> CBOR {
        match self.case() {
            Case::Leaf(cbor) => vec![CBOR::from(CASE_LEAF), cbor.clone()].into(),
            Case::KnownValue(value) => {
                vec![CBOR::from(CASE_KNOWN_VALUE), CBOR::from(value.value())].into()
            }
            Case::Wrapped(inner) => vec![CBOR::from(CASE_WRAPPED), inner.clone().into()].into(),
            Case::Node(subject, assertions) => {
                let assertions: Vec<CBOR> = assertions.iter().cloned().map(CBOR::from).collect();
                vec![CBOR::from(CASE_NODE), subject.clone().into(), assertions.into()].into()
            }
            Case::Assertion(predicate, object) => {
                vec![CBOR::from(CASE_ASSERTION), predicate.clone().into(), object.clone().into()]
                    .into()
            }
            Case::Elided(digest) => vec![CBOR::from(CASE_ELIDED), digest.into()].into(),
            Case::Encrypted(message) => {
                vec![CBOR::from(CASE_ENCRYPTED), message.clone().into()].into()
            }
            Case::Compressed(compressed) => {
                vec![CBOR::from(CASE_COMPRESSED), compressed.clone().into()].into()
            }
        }
    }
}

impl CBORTaggedDecodable for Envelope {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let items = match cbor.as_case() {
            CBORCase::Array(items) => items,
            _ => return Err(dcbor::Error::WrongType),
        };
        if items.is_empty() {
            return Err(dcbor::Error::WrongType);
        }
        let variant: u8 = items[0].clone().try_into()?;
        let custom = |e: Error| dcbor::Error::Custom(e.to_string());
        match variant {
            CASE_LEAF if items.len() == 2 => Ok(Envelope::new(items[1].clone())),
            CASE_KNOWN_VALUE if items.len() == 2 => {
                let value: u64 = items[1].clone().try_into()?;
                Ok(Envelope::new_known_value(KnownValue::new(value)))
            }
            CASE_WRAPPED if items.len() == 2 => {
                let inner: Envelope = items[1].clone().try_into()?;
                Ok(inner.wrap())
            }
            CASE_NODE if items.len() == 3 => {
                let subject: Envelope = items[1].clone().try_into()?;
                let assertions_cbor: Vec<CBOR> = items[2].clone().try_into()?;
                let assertions: std::result::Result<Vec<Envelope>, dcbor::Error> =
                    assertions_cbor.into_iter().map(|c| c.try_into()).collect();
                Envelope::from_parts_node(subject, assertions?).map_err(custom)
            }
            CASE_ASSERTION if items.len() == 3 => {
                let predicate: Envelope = items[1].clone().try_into()?;
                let object: Envelope = items[2].clone().try_into()?;
                Ok(Envelope::new_assertion(predicate, object))
            }
            CASE_ELIDED if items.len() == 2 => {
                let digest: Digest = items[1].clone().try_into()?;
                Ok(Envelope::new_elided(digest))
            }
            CASE_ENCRYPTED if items.len() == 2 => {
                let message: EncryptedMessage = items[1].clone().try_into()?;
                // The pre-encryption digest travels as the AEAD's associated
                // data: not secret, but authenticated, so it survives
                // encryption without needing a separate stored field.
                let digest = Digest::from_data(message.aad())
                    .map_err(|e| custom(Error::Components(e)))?;
                Ok(Envelope::new_encrypted(message, digest))
            }
            CASE_COMPRESSED if items.len() == 2 => {
                let compressed: Compressed = items[1].clone().try_into()?;
                let decompressed =
                    compressed.decompress().map_err(|e| custom(Error::Components(e)))?;
                let inner_cbor = CBOR::from_data(&decompressed)?;
                let subject = Envelope::from_tagged_cbor(&inner_cbor)?;
                Ok(Envelope::new_compressed(compressed, subject.digest()))
            }
            other => Err(dcbor::Error::Custom(format!("unknown envelope case {other}"))),
        }
    }
}

impl From<Envelope> for CBOR {
    fn from(value: Envelope) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for Envelope {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
