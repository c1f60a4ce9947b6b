use dcbor::prelude::*;

use crate::tags::{TAG_SSKR_SHARE, TAG_SSKR_SHARE_LEGACY};

/// A CBOR-codable wrapper around a raw [`bc_sskr::Share`]. Accepts either
/// the legacy tag `309` or the current `40309` on decode, and always emits
/// the current tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SSKRShare(bc_sskr::Share);

impl SSKRShare {
    pub fn new(share: bc_sskr::Share) -> Self {
        Self(share)
    }

    pub fn into_inner(self) -> bc_sskr::Share {
        self.0
    }

    pub fn inner(&self) -> &bc_sskr::Share {
        &self.0
    }
}

impl CBORTagged for SSKRShare {
    fn cbor_tags() -> Vec<Tag> {
        vec![
            Tag::new(TAG_SSKR_SHARE, "sskr"),
            Tag::new(TAG_SSKR_SHARE_LEGACY, "sskr"),
        ]
    }
}

impl CBORTaggedEncodable for SSKRShare {
    fn untagged_cbor(&self) -> CBOR {
        CBOR::to_byte_string(self.0.to_bytes())
    }
}

impl CBORTaggedDecodable for SSKRShare {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let bytes: Vec<u8> = cbor.clone().try_into()?;
        let share = bc_sskr::Share::from_bytes(&bytes)
            .map_err(|e| dcbor::Error::Custom(e.to_string()))?;
        Ok(Self(share))
    }
}

impl From<SSKRShare> for CBOR {
    fn from(value: SSKRShare) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for SSKRShare {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_sskr::{GroupSpec, Spec};

    #[test]
    fn cbor_round_trip_uses_current_tag() {
        let spec = Spec::new(1, vec![GroupSpec::new(2, 3).unwrap()]).unwrap();
        let groups = bc_sskr::split(&spec, b"0123456789abcdef").unwrap();
        let share = SSKRShare::new(groups[0][0].clone());
        let cbor: CBOR = share.clone().into();
        assert!(matches!(cbor.as_case(), CBORCase::Tagged(tag, _) if tag.value() == TAG_SSKR_SHARE));
        let parsed: SSKRShare = cbor.try_into().unwrap();
        assert_eq!(parsed, share);
    }

    #[test]
    fn decodes_legacy_tag() {
        let spec = Spec::new(1, vec![GroupSpec::new(2, 3).unwrap()]).unwrap();
        let groups = bc_sskr::split(&spec, b"0123456789abcdef").unwrap();
        let share = SSKRShare::new(groups[0][0].clone());
        let legacy = CBOR::to_tagged_value(TAG_SSKR_SHARE_LEGACY, CBOR::to_byte_string(share.inner().to_bytes()));
        let parsed: SSKRShare = legacy.try_into().unwrap();
        assert_eq!(parsed, share);
    }
}
