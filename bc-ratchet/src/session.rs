//! The double-ratchet session state machine: X3DH handoff, forward-secret
//! send/receive, DH-ratchet steps, and tolerant out-of-order delivery.

use bc_crypto::RandomNumberGenerator;

use crate::chain::{ChainKey, MessageKey};
use crate::constants::{
    CURRENT_VERSION, HKDF_INFO_RATCHET, MAX_FORWARD_JUMPS, MIN_SUPPORTED_VERSION,
};
use crate::error::{Error, Result};
use crate::store::{ArchivedState, ArchivedStateStore, ReceiverChainStore, SkippedMessageKeyStore};
use crate::x3dh::X3dhOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    AliceInitialized,
    Established,
}

/// One encrypted message plus the header a receiving session needs to find
/// or derive the message key that opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatchetMessage {
    pub version: u8,
    pub sender_ratchet_public: [u8; 32],
    pub previous_counter: u32,
    pub counter: u32,
    pub ciphertext: Vec<u8>,
    pub mac: [u8; 8],
}

pub struct RatchetSession {
    state: SessionState,
    session_version: u8,
    root_key: [u8; 32],
    #[allow(dead_code)]
    pqr_init_key: [u8; 32],
    our_identity_public: [u8; 32],
    their_identity_public: [u8; 32],
    sender_ratchet_private: [u8; 32],
    sender_ratchet_public: [u8; 32],
    sender_chain: Option<ChainKey>,
    previous_sending_chain_length: u32,
    their_current_ratchet_public: Option<[u8; 32]>,
    needs_sending_ratchet_step: bool,
    receiver_chains: ReceiverChainStore,
    skipped_keys: SkippedMessageKeyStore,
    archived_states: ArchivedStateStore,
}

impl RatchetSession {
    #[allow(clippy::too_many_arguments)]
    fn from_x3dh(
        output: X3dhOutput,
        our_identity_public: [u8; 32],
        their_identity_public: [u8; 32],
        sender_ratchet_private: [u8; 32],
        sender_ratchet_public: [u8; 32],
    ) -> Self {
        Self {
            state: SessionState::AliceInitialized,
            session_version: output.session_version,
            root_key: output.root_key,
            pqr_init_key: output.pqr_init_key,
            our_identity_public,
            their_identity_public,
            sender_ratchet_private,
            sender_ratchet_public,
            sender_chain: Some(ChainKey::new(output.sender_chain_key)),
            previous_sending_chain_length: 0,
            their_current_ratchet_public: None,
            needs_sending_ratchet_step: false,
            receiver_chains: ReceiverChainStore::new(),
            skipped_keys: SkippedMessageKeyStore::new(),
            archived_states: ArchivedStateStore::new(),
        }
    }

    /// Alice's side: she already generated her base keypair for X3DH and
    /// reuses it as her first sending ratchet keypair.
    pub fn init_alice(
        output: X3dhOutput,
        our_identity_public: [u8; 32],
        their_identity_public: [u8; 32],
        our_ratchet_private: [u8; 32],
        our_ratchet_public: [u8; 32],
    ) -> Self {
        Self::from_x3dh(
            output,
            our_identity_public,
            their_identity_public,
            our_ratchet_private,
            our_ratchet_public,
        )
    }

    /// Bob's side: per this protocol's resolution of X3DH's open question,
    /// Bob seeds his sender chain from a fresh ratchet keypair of his own.
    pub fn init_bob(
        output: X3dhOutput,
        our_identity_public: [u8; 32],
        their_identity_public: [u8; 32],
        our_ratchet_private: [u8; 32],
        our_ratchet_public: [u8; 32],
    ) -> Self {
        Self::from_x3dh(
            output,
            our_identity_public,
            their_identity_public,
            our_ratchet_private,
            our_ratchet_public,
        )
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session_version(&self) -> u8 {
        self.session_version
    }

    fn dh_ratchet_receive(&mut self, their_new_public: [u8; 32]) -> Result<ChainKey> {
        let dh_out = bc_crypto::x25519_shared_secret(&self.sender_ratchet_private, &their_new_public)
            .map_err(Error::Crypto)?;
        let okm = bc_crypto::hkdf_sha256(&self.root_key, &dh_out, HKDF_INFO_RATCHET, 64)?;
        let mut new_root = [0u8; 32];
        let mut receiving_chain_key = [0u8; 32];
        new_root.copy_from_slice(&okm[0..32]);
        receiving_chain_key.copy_from_slice(&okm[32..64]);
        self.root_key = new_root;
        Ok(ChainKey::new(receiving_chain_key))
    }

    fn step_sending_ratchet(&mut self, rng: &mut impl RandomNumberGenerator) -> Result<()> {
        let their_public = self
            .their_current_ratchet_public
            .ok_or(Error::InvalidState)?;
        let new_private: [u8; 32] = rng.random_array();
        let new_public = bc_crypto::x25519_public_key(&new_private);
        let dh_out =
            bc_crypto::x25519_shared_secret(&new_private, &their_public).map_err(Error::Crypto)?;
        let okm = bc_crypto::hkdf_sha256(&self.root_key, &dh_out, HKDF_INFO_RATCHET, 64)?;
        let mut new_root = [0u8; 32];
        let mut sending_chain_key = [0u8; 32];
        new_root.copy_from_slice(&okm[0..32]);
        sending_chain_key.copy_from_slice(&okm[32..64]);
        self.previous_sending_chain_length =
            self.sender_chain.map(|c| c.index).unwrap_or(0);
        self.root_key = new_root;
        self.sender_ratchet_private = new_private;
        self.sender_ratchet_public = new_public;
        self.sender_chain = Some(ChainKey::new(sending_chain_key));
        self.needs_sending_ratchet_step = false;
        Ok(())
    }

    pub fn send(
        &mut self,
        plaintext: &[u8],
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<RatchetMessage> {
        if self.state == SessionState::Uninitialized {
            return Err(Error::InvalidState);
        }
        if self.needs_sending_ratchet_step {
            self.step_sending_ratchet(rng)?;
        }
        let chain = self.sender_chain.ok_or(Error::InvalidState)?;
        let (message_key, next_chain) = chain.ratchet();
        self.sender_chain = Some(next_chain);

        let material = message_key.derive_material()?;
        let header = serialize_header(
            self.session_version,
            &self.sender_ratchet_public,
            self.previous_sending_chain_length,
            message_key.counter,
        );
        let ciphertext = bc_crypto::aead_chacha20_poly1305_encrypt(
            &material.cipher_key,
            &nonce_from_iv(&material.iv),
            plaintext,
            &header,
        );
        let mac = truncated_mac(
            &material.mac_key,
            &self.our_identity_public,
            &self.their_identity_public,
            &header,
            &ciphertext,
        );

        Ok(RatchetMessage {
            version: self.session_version,
            sender_ratchet_public: self.sender_ratchet_public,
            previous_counter: self.previous_sending_chain_length,
            counter: message_key.counter,
            ciphertext,
            mac,
        })
    }

    pub fn receive(&mut self, message: &RatchetMessage) -> Result<Vec<u8>> {
        if message.version < MIN_SUPPORTED_VERSION || message.version > CURRENT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: message.version,
                min: MIN_SUPPORTED_VERSION,
                max: CURRENT_VERSION,
            });
        }
        if self.state == SessionState::Uninitialized {
            return Err(Error::InvalidState);
        }

        if let Some(message_key) =
            self.skipped_keys.take(&message.sender_ratchet_public, message.counter)
        {
            return self.open(message, &message_key);
        }

        if self.receiver_chains.find(&message.sender_ratchet_public).is_none() {
            if !self.receiver_chains.is_empty() {
                self.archived_states.archive(ArchivedState {
                    root_key: self.root_key,
                    receiver_chains: self.receiver_chains.iter().cloned().collect(),
                });
            }
            let new_chain = self.dh_ratchet_receive(message.sender_ratchet_public)?;
            self.receiver_chains.update(message.sender_ratchet_public, new_chain);
            self.their_current_ratchet_public = Some(message.sender_ratchet_public);
            self.needs_sending_ratchet_step = true;
            self.state = SessionState::Established;
            tracing::debug!(
                skipped_keys = self.skipped_keys.len(),
                archived_states = self.archived_states.len(),
                "DH-ratchet step on receive"
            );
        }

        let chain = self
            .receiver_chains
            .find(&message.sender_ratchet_public)
            .cloned()
            .ok_or(Error::InvalidState)?
            .chain_key;

        let jump = message.counter.saturating_sub(chain.index);
        if jump > MAX_FORWARD_JUMPS {
            return Err(Error::ForwardJumpTooLarge { requested: jump, limit: MAX_FORWARD_JUMPS });
        }

        let mut current = chain;
        let mut found_key = None;
        while current.index <= message.counter {
            let (mk, next) = current.ratchet();
            if mk.counter == message.counter {
                found_key = Some(mk);
                current = next;
                break;
            }
            self.skipped_keys.insert(message.sender_ratchet_public, mk);
            current = next;
        }
        self.receiver_chains.update(message.sender_ratchet_public, current);

        let message_key = found_key.ok_or(Error::MessageTooOld { counter: message.counter })?;
        self.open(message, &message_key)
    }

    fn open(&self, message: &RatchetMessage, message_key: &MessageKey) -> Result<Vec<u8>> {
        let material = message_key.derive_material()?;
        let header = serialize_header(
            message.version,
            &message.sender_ratchet_public,
            message.previous_counter,
            message.counter,
        );
        let expected_mac = truncated_mac(
            &material.mac_key,
            &self.their_identity_public,
            &self.our_identity_public,
            &header,
            &message.ciphertext,
        );
        if expected_mac != message.mac {
            tracing::debug!(counter = message.counter, "MAC check failed on receive");
            return Err(Error::MacMismatch);
        }
        bc_crypto::aead_chacha20_poly1305_decrypt(
            &material.cipher_key,
            &nonce_from_iv(&material.iv),
            &message.ciphertext,
            &header,
        )
        .map_err(Error::Crypto)
    }
}

fn nonce_from_iv(iv: &[u8; 16]) -> [u8; 12] {
    let mut nonce = [0u8; 12];
    nonce.copy_from_slice(&iv[0..12]);
    nonce
}

fn serialize_header(version: u8, dh_public: &[u8; 32], previous_counter: u32, counter: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + 32 + 4 + 4);
    out.push(version);
    out.extend_from_slice(dh_public);
    out.extend_from_slice(&previous_counter.to_be_bytes());
    out.extend_from_slice(&counter.to_be_bytes());
    out
}

fn truncated_mac(
    mac_key: &[u8; 32],
    sender_identity: &[u8; 32],
    receiver_identity: &[u8; 32],
    header: &[u8],
    ciphertext: &[u8],
) -> [u8; 8] {
    let mut data = Vec::with_capacity(32 + 32 + header.len() + ciphertext.len());
    data.extend_from_slice(sender_identity);
    data.extend_from_slice(receiver_identity);
    data.extend_from_slice(header);
    data.extend_from_slice(ciphertext);
    let full = bc_crypto::hmac_sha256(mac_key, &data);
    let mut tag = [0u8; 8];
    tag.copy_from_slice(&full[0..8]);
    tag
}
