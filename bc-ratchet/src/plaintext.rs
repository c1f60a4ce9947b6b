//! The plaintext side channel: a fixed-version, unencrypted notification a
//! receiver can send back when it cannot advance a session (unknown
//! message key, legacy version) instead of a silent drop.

use crate::constants::PLAINTEXT_VERSION;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaintextReason {
    MessageTooOld,
    ForwardJumpTooLarge,
    SessionNotEstablished,
}

/// An out-of-band notice, not covered by any chain's authentication: the
/// receiving side carries no secret that could sign it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaintextContent {
    version: u8,
    pub reason: PlaintextReason,
    pub sender_ratchet_public: [u8; 32],
    pub counter: u32,
}

impl PlaintextContent {
    pub fn new(reason: PlaintextReason, sender_ratchet_public: [u8; 32], counter: u32) -> Self {
        Self { version: PLAINTEXT_VERSION, reason, sender_ratchet_public, counter }
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// Maps a failed `receive` into the notice a session peer would send
    /// back, if the failure is one a peer can usefully be told about.
    pub fn from_receive_error(
        error: &Error,
        sender_ratchet_public: [u8; 32],
        counter: u32,
    ) -> Option<Self> {
        let reason = match error {
            Error::MessageTooOld { .. } => PlaintextReason::MessageTooOld,
            Error::ForwardJumpTooLarge { .. } => PlaintextReason::ForwardJumpTooLarge,
            Error::InvalidState => PlaintextReason::SessionNotEstablished,
            _ => return None,
        };
        Some(Self::new(reason, sender_ratchet_public, counter))
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 32 + 4 + 1);
        out.push(self.version);
        out.extend_from_slice(&self.sender_ratchet_public);
        out.extend_from_slice(&self.counter.to_be_bytes());
        out.push(match self.reason {
            PlaintextReason::MessageTooOld => 0,
            PlaintextReason::ForwardJumpTooLarge => 1,
            PlaintextReason::SessionNotEstablished => 2,
        });
        out
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() != 1 + 32 + 4 + 1 {
            return Err(Error::InvalidState);
        }
        let version = data[0];
        if version != PLAINTEXT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: version,
                min: PLAINTEXT_VERSION,
                max: PLAINTEXT_VERSION,
            });
        }
        let mut sender_ratchet_public = [0u8; 32];
        sender_ratchet_public.copy_from_slice(&data[1..33]);
        let mut counter_bytes = [0u8; 4];
        counter_bytes.copy_from_slice(&data[33..37]);
        let counter = u32::from_be_bytes(counter_bytes);
        let reason = match data[37] {
            0 => PlaintextReason::MessageTooOld,
            1 => PlaintextReason::ForwardJumpTooLarge,
            2 => PlaintextReason::SessionNotEstablished,
            _ => return Err(Error::InvalidState),
        };
        Ok(Self { version, reason, sender_ratchet_public, counter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_encode_decode() {
        let content = PlaintextContent::new(PlaintextReason::MessageTooOld, [7u8; 32], 42);
        let encoded = content.encode();
        let decoded = PlaintextContent::decode(&encoded).unwrap();
        assert_eq!(content, decoded);
    }

    #[test]
    fn from_receive_error_maps_known_reasons() {
        let err = Error::MessageTooOld { counter: 5 };
        let content = PlaintextContent::from_receive_error(&err, [1u8; 32], 5).unwrap();
        assert_eq!(content.reason, PlaintextReason::MessageTooOld);
        assert_eq!(content.version(), PLAINTEXT_VERSION);
    }

    #[test]
    fn from_receive_error_ignores_unrelated_errors() {
        let err = Error::MacMismatch;
        assert!(PlaintextContent::from_receive_error(&err, [1u8; 32], 0).is_none());
    }
}
