use dcbor::prelude::*;

use crate::UR;

/// Gives every tagged-CBOR-codable type a UR string encode/decode pair,
/// generalizing the teacher's `CBORTaggedCodable` blanket one layer up.
/// The UR type name is the tag's registered name with any `bigpos`-style
/// underscores mapped to hyphens, lowercased.
pub trait URCodable: CBORTaggedEncodable + CBORTaggedDecodable + Sized {
    fn ur_type_name() -> String {
        Self::cbor_tags()[0]
            .name()
            .map(|n| n.to_lowercase())
            .unwrap_or_else(|| Self::cbor_tags()[0].value().to_string())
    }

    fn ur(&self) -> crate::Result<UR> {
        UR::new(Self::ur_type_name(), self.tagged_cbor())
    }

    fn ur_string(&self) -> crate::Result<String> {
        Ok(self.ur()?.string())
    }

    fn from_ur(ur: &UR) -> crate::Result<Self> {
        Ok(Self::from_tagged_cbor(ur.cbor())?)
    }

    fn from_ur_string(s: &str) -> crate::Result<Self> {
        let ur = UR::from_string(s)?;
        Self::from_ur(&ur)
    }
}

impl<T> URCodable for T where T: CBORTaggedEncodable + CBORTaggedDecodable + Sized {}
