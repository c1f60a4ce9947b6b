use chrono::{DateTime, Utc};
use dcbor::prelude::*;

use crate::error::Error;
use crate::mark::ProvenanceMark;
use crate::resolution::Resolution;
use crate::tags::TAG_PROVENANCE_MARK;

impl CBORTagged for ProvenanceMark {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_PROVENANCE_MARK, "provenance-mark")]
    }
}

impl CBORTaggedEncodable for ProvenanceMark {
    fn untagged_cbor(&self) -> CBOR {
        let mut items = vec![
            CBOR::from(self.resolution().discriminator()),
            CBOR::to_byte_string(self.key()),
            CBOR::to_byte_string(self.hash()),
            CBOR::to_byte_string(self.chain_id()),
            CBOR::from(self.seq()),
            CBOR::from(self.date().to_rfc3339()),
        ];
        if let Some(info) = self.info() {
            items.push(info.clone());
        }
        items.into()
    }
}

impl CBORTaggedDecodable for ProvenanceMark {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let items = match cbor.as_case() {
            CBORCase::Array(items) => items,
            _ => return Err(dcbor::Error::WrongType),
        };
        if items.len() != 6 && items.len() != 7 {
            return Err(dcbor::Error::WrongType);
        }
        let discriminator: u8 = items[0].clone().try_into()?;
        let resolution = Resolution::from_discriminator(discriminator)
            .ok_or_else(|| dcbor::Error::Custom("unknown provenance mark resolution".into()))?;
        let key: Vec<u8> = items[1].clone().try_into()?;
        let hash: Vec<u8> = items[2].clone().try_into()?;
        let chain_id: Vec<u8> = items[3].clone().try_into()?;
        let seq: u32 = items[4].clone().try_into()?;
        let date_string: String = items[5].clone().try_into()?;
        let date: DateTime<Utc> = date_string
            .parse::<DateTime<Utc>>()
            .map_err(|e| dcbor::Error::Custom(format!("invalid provenance mark date: {e}")))?;
        let info = items.get(6).cloned();

        let len = resolution.link_length();
        if key.len() != len {
            return Err(custom(Error::InvalidLength { field: "key", expected: len, actual: key.len() }));
        }
        if hash.len() != len {
            return Err(custom(Error::InvalidLength { field: "hash", expected: len, actual: hash.len() }));
        }
        if chain_id.len() != len {
            return Err(custom(Error::InvalidLength { field: "chain_id", expected: len, actual: chain_id.len() }));
        }
        if seq == 0 && key != chain_id {
            return Err(custom(Error::GenesisKeyMismatch));
        }

        Ok(ProvenanceMark::from_parts(resolution, key, hash, chain_id, seq, date, info))
    }
}

fn custom(e: Error) -> dcbor::Error {
    dcbor::Error::Custom(e.to_string())
}

impl From<ProvenanceMark> for CBOR {
    fn from(value: ProvenanceMark) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for ProvenanceMark {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}
