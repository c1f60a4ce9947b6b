//! Bounded, FIFO-evicting collections backing a session: a handful of live
//! receiver chains, a cap on skipped-but-not-yet-consumed message keys, and
//! a cap on archived pre-ratchet states kept around for very late deliveries.

use std::collections::VecDeque;

use crate::chain::{ChainKey, MessageKey};
use crate::constants::{MAX_ARCHIVED_STATES, MAX_RECEIVER_CHAINS, MAX_SKIPPED_MESSAGE_KEYS};

#[derive(Debug, Clone)]
pub struct ReceiverChain {
    pub ratchet_public: [u8; 32],
    pub chain_key: ChainKey,
}

#[derive(Debug, Default, Clone)]
pub struct ReceiverChainStore {
    chains: VecDeque<ReceiverChain>,
}

impl ReceiverChainStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, ratchet_public: &[u8; 32]) -> Option<&ReceiverChain> {
        self.chains.iter().find(|c| &c.ratchet_public == ratchet_public)
    }

    /// Updates an existing chain in place, or inserts a new one, evicting
    /// the oldest chain once the count exceeds the bound.
    pub fn update(&mut self, ratchet_public: [u8; 32], chain_key: ChainKey) {
        if let Some(existing) = self
            .chains
            .iter_mut()
            .find(|c| c.ratchet_public == ratchet_public)
        {
            existing.chain_key = chain_key;
            return;
        }
        self.chains.push_back(ReceiverChain { ratchet_public, chain_key });
        if self.chains.len() > MAX_RECEIVER_CHAINS {
            self.chains.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReceiverChain> {
        self.chains.iter()
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SkippedMessageKeyStore {
    entries: VecDeque<([u8; 32], u32, MessageKey)>,
}

impl SkippedMessageKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message key this receiver chain skipped past, evicting the
    /// oldest entry once the count exceeds the bound.
    pub fn insert(&mut self, ratchet_public: [u8; 32], message_key: MessageKey) {
        self.entries.push_back((ratchet_public, message_key.counter, message_key));
        if self.entries.len() > MAX_SKIPPED_MESSAGE_KEYS {
            self.entries.pop_front();
        }
    }

    /// Consumes and removes a skipped key if present. A key is usable only
    /// once: out-of-order replays of the same counter must fail.
    pub fn take(&mut self, ratchet_public: &[u8; 32], counter: u32) -> Option<MessageKey> {
        let index = self
            .entries
            .iter()
            .position(|(rp, c, _)| rp == ratchet_public && *c == counter)?;
        self.entries.remove(index).map(|(_, _, key)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A snapshot of a session's receiver chains taken just before a DH-ratchet
/// step discards them, kept so a message sent under the old sending chain
/// but delivered very late can still be decrypted.
#[derive(Debug, Clone)]
pub struct ArchivedState {
    pub root_key: [u8; 32],
    pub receiver_chains: Vec<ReceiverChain>,
}

#[derive(Debug, Default)]
pub struct ArchivedStateStore {
    states: VecDeque<ArchivedState>,
}

impl ArchivedStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn archive(&mut self, state: ArchivedState) {
        self.states.push_back(state);
        if self.states.len() > MAX_ARCHIVED_STATES {
            self.states.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArchivedState> {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}
