use chrono::{DateTime, Utc};
use dcbor::prelude::*;

use crate::error::{Error, Result};
use crate::resolution::Resolution;

/// One link in a provenance chain: a forward commitment that can only be
/// produced by whoever holds the previous mark's `key`.
///
/// The genesis mark (`seq == 0`) has `key == chain_id`; its `hash` has no
/// meaning to verify against (there is no previous key) and is set to the
/// all-zero link. Every subsequent mark's `hash` commits to the *previous*
/// mark's `key` together with this mark's own `(resolution, chain_id, seq,
/// date, info)` fields, so a verifier who is handed mark `i+1` and already
/// trusts mark `i`'s `key` can check mark `i+1`'s `hash` without needing
/// any other mark in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceMark {
    resolution: Resolution,
    key: Vec<u8>,
    hash: Vec<u8>,
    chain_id: Vec<u8>,
    seq: u32,
    date: DateTime<Utc>,
    info: Option<CBOR>,
}

impl ProvenanceMark {
    /// Reconstructs a mark from already-validated parts (used by the CBOR
    /// decoder, which has already checked link lengths and the genesis
    /// invariant).
    pub(crate) fn from_parts(
        resolution: Resolution,
        key: Vec<u8>,
        hash: Vec<u8>,
        chain_id: Vec<u8>,
        seq: u32,
        date: DateTime<Utc>,
        info: Option<CBOR>,
    ) -> Self {
        Self { resolution, key, hash, chain_id, seq, date, info }
    }

    /// Builds the first mark of a new chain. `key` doubles as the
    /// chain's identifier.
    pub fn new_genesis(
        resolution: Resolution,
        key: Vec<u8>,
        date: DateTime<Utc>,
        info: Option<CBOR>,
    ) -> Result<Self> {
        let len = resolution.link_length();
        if key.len() != len {
            return Err(Error::InvalidLength { field: "key", expected: len, actual: key.len() });
        }
        Ok(Self {
            resolution,
            chain_id: key.clone(),
            hash: vec![0u8; len],
            key,
            seq: 0,
            date,
            info,
        })
    }

    /// Builds the mark that follows `self` in the chain: a fresh `key`,
    /// `seq + 1`, and a `hash` committing to `self.key` plus the new
    /// mark's own fields.
    pub fn next(
        &self,
        next_key: Vec<u8>,
        date: DateTime<Utc>,
        info: Option<CBOR>,
    ) -> Result<Self> {
        let len = self.resolution.link_length();
        if next_key.len() != len {
            return Err(Error::InvalidLength { field: "key", expected: len, actual: next_key.len() });
        }
        let seq = self.seq + 1;
        let hash = chained_hash(self.resolution, self.key(), self.chain_id(), seq, date, info.as_ref());
        Ok(Self {
            resolution: self.resolution,
            chain_id: self.chain_id.clone(),
            key: next_key,
            hash,
            seq,
            date,
            info,
        })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    pub fn chain_id(&self) -> &[u8] {
        &self.chain_id
    }

    pub fn seq(&self) -> u32 {
        self.seq
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn info(&self) -> Option<&CBOR> {
        self.info.as_ref()
    }

    pub fn is_genesis(&self) -> bool {
        self.seq == 0
    }

    #[cfg(test)]
    pub(crate) fn hash_mut_for_test(&mut self) -> &mut Vec<u8> {
        &mut self.hash
    }

    /// True if this mark's `key` equals its `chain_id`, the genesis
    /// invariant — checked separately from `seq == 0` so a chain with a
    /// non-genesis mark claiming `seq == 0` is still distinguishable from
    /// one with a malformed genesis key.
    pub fn has_genesis_key(&self) -> bool {
        self.key == self.chain_id
    }

    /// True iff `next.hash` is exactly the commitment this mark's `key`
    /// would produce for `next`'s other fields.
    pub fn verifies(&self, next: &ProvenanceMark) -> bool {
        if self.resolution != next.resolution || self.chain_id != next.chain_id {
            return false;
        }
        let expected = chained_hash(
            self.resolution,
            self.key(),
            self.chain_id(),
            next.seq,
            next.date,
            next.info.as_ref(),
        );
        expected == next.hash
    }
}

fn chained_hash(
    resolution: Resolution,
    previous_key: &[u8],
    chain_id: &[u8],
    seq: u32,
    date: DateTime<Utc>,
    info: Option<&CBOR>,
) -> Vec<u8> {
    let mut preimage = Vec::new();
    preimage.extend_from_slice(previous_key);
    preimage.push(resolution.discriminator());
    preimage.extend_from_slice(chain_id);
    preimage.extend_from_slice(&seq.to_be_bytes());
    preimage.extend_from_slice(date.to_rfc3339().as_bytes());
    if let Some(info) = info {
        preimage.extend_from_slice(&info.to_cbor_data());
    }
    let digest = bc_crypto::sha256(&preimage);
    digest[..resolution.link_length()].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        use chrono::TimeZone;
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn genesis_key_equals_chain_id() {
        let mark = ProvenanceMark::new_genesis(
            Resolution::Low,
            vec![1, 2, 3, 4],
            date(2025, 1, 1),
            None,
        )
        .unwrap();
        assert!(mark.is_genesis());
        assert!(mark.has_genesis_key());
    }

    #[test]
    fn next_mark_verifies_against_previous_key() {
        let genesis = ProvenanceMark::new_genesis(
            Resolution::Low,
            vec![1, 2, 3, 4],
            date(2025, 1, 1),
            None,
        )
        .unwrap();
        let next = genesis.next(vec![5, 6, 7, 8], date(2025, 1, 2), None).unwrap();
        assert_eq!(next.seq(), 1);
        assert!(genesis.verifies(&next));
    }

    #[test]
    fn tampered_hash_fails_verification() {
        let genesis = ProvenanceMark::new_genesis(
            Resolution::Low,
            vec![1, 2, 3, 4],
            date(2025, 1, 1),
            None,
        )
        .unwrap();
        let mut next = genesis.next(vec![5, 6, 7, 8], date(2025, 1, 2), None).unwrap();
        next.hash[0] ^= 0xff;
        assert!(!genesis.verifies(&next));
    }

    #[test]
    fn wrong_key_length_is_rejected() {
        let result = ProvenanceMark::new_genesis(
            Resolution::Low,
            vec![1, 2, 3],
            date(2025, 1, 1),
            None,
        );
        assert!(result.is_err());
    }
}
