//! Splitting an envelope's subject into SSKR shares and joining them back.
//!
//! The subject is encrypted once under a random content key; the content
//! key itself (not the subject) is what gets split, so every share is a
//! small fixed-size secret regardless of the subject's size. Each share is
//! delivered as its own envelope: the encrypted subject plus one
//! `'sskrShare'` assertion.

use bc_components::SymmetricKey;
use bc_known_values::known_values;
use bc_sskr::{GroupSpec, Share, Spec};
use dcbor::prelude::*;

use crate::envelope::{Case, Envelope};
use crate::error::{Error, Result};

impl Envelope {
    /// Splits this envelope into `spec.group_threshold()`-of-`N` SSKR
    /// shares, grouped as `spec` describes. Returns one envelope per share,
    /// grouped the same way as the input groups.
    pub fn sskr_split(&self, spec: &Spec) -> Result<Vec<Vec<Envelope>>> {
        let content_key = SymmetricKey::new_random();
        let encrypted = self.encrypt_subject(&content_key);
        let share_groups =
            bc_sskr::split(spec, content_key.data()).map_err(|e| Error::Sskr(e))?;
        Ok(share_groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|share| {
                        encrypted.add_assertion(
                            Envelope::new_known_value(known_values::SSKR_SHARE),
                            Envelope::new(share_to_cbor(&share)),
                        )
                    })
                    .collect()
            })
            .collect())
    }

    /// Recombines a flat list of share envelopes (spanning enough groups to
    /// meet the group threshold) back into the original envelope.
    pub fn sskr_join(share_envelopes: &[Envelope]) -> Result<Envelope> {
        let sskr_share = Envelope::new_known_value(known_values::SSKR_SHARE);
        let mut shares = Vec::new();
        let mut encrypted_subject = None;
        for envelope in share_envelopes {
            let subject = envelope.subject();
            match &encrypted_subject {
                None => encrypted_subject = Some(subject),
                Some(existing) if existing.digest() == subject.digest() => {}
                Some(_) => {
                    return Err(Error::InvalidData(
                        "share envelopes do not all encrypt the same subject".into(),
                    ))
                }
            }
            let object = envelope
                .object_for_predicate(&sskr_share)
                .ok_or_else(|| Error::InvalidData("envelope carries no sskrShare assertion".into()))?;
            let cbor = object.leaf()?;
            shares.push(share_from_cbor(&cbor)?);
        }
        let subject = encrypted_subject.ok_or_else(|| Error::InvalidData("no shares given".into()))?;
        let secret = bc_sskr::combine(&shares).map_err(Error::Sskr)?;
        if secret.len() != 32 {
            return Err(Error::InvalidData("recombined secret is not a content key".into()));
        }
        let mut key_bytes = [0u8; 32];
        key_bytes.copy_from_slice(&secret);
        let content_key = SymmetricKey::from_bytes(key_bytes);
        let encrypted = match subject.case() {
            Case::Encrypted(_) => subject,
            _ => return Err(Error::TypeMismatch),
        };
        encrypted.decrypt_subject(&content_key)
    }
}

fn share_to_cbor(share: &Share) -> CBOR {
    CBOR::to_byte_string(share.to_bytes())
}

fn share_from_cbor(cbor: &CBOR) -> Result<Share> {
    let bytes: Vec<u8> = cbor.clone().try_into()?;
    Share::from_bytes(&bytes).map_err(Error::Sskr)
}
