//! Signing and verification: a `'signed': Signature` assertion over the
//! subject's digest, optionally with metadata describing the signer.

use bc_components::{Signature, SigningPrivateKey, SigningPublicKey};
use bc_known_values::known_values;
use dcbor::prelude::*;

use crate::envelope::Envelope;
use crate::error::{Error, Result};

/// Optional metadata carried alongside a signature. When present, the
/// envelope is wrapped before signing, so that the signature covers both
/// the subject and the metadata without the metadata itself needing to be
/// part of the signed digest's preimage.
#[derive(Debug, Clone, Default)]
pub struct SignatureMetadata {
    pub note: Option<String>,
}

impl Envelope {
    /// Adds a `'signed': Signature` assertion over this envelope's digest.
    /// With `metadata`, the envelope is wrapped first so the signature and
    /// the metadata assertions both ride on the same outer envelope.
    pub fn add_signature(
        &self,
        signer: &SigningPrivateKey,
        metadata: Option<SignatureMetadata>,
    ) -> Result<Envelope> {
        // The signature always covers the future subject's digest, so
        // verification can recompute the same message from
        // `self.subject()` regardless of what gets layered on afterward.
        let subject = match metadata {
            Some(_) => self.wrap(),
            None => self.clone(),
        };
        let message = subject.digest().data().to_vec();
        let signature = signer.sign(&message).map_err(Error::Components)?;
        let mut result = subject;
        if let Some(meta) = &metadata {
            if let Some(note) = &meta.note {
                result = result.add_assertion(
                    Envelope::new_known_value(known_values::NOTE),
                    Envelope::new(note.clone()),
                );
            }
        }
        Ok(result.add_assertion(
            Envelope::new_known_value(known_values::SIGNED),
            Envelope::new(signature_to_cbor(&signature)),
        ))
    }

    /// True if at least one `'signed'` assertion verifies against this
    /// envelope's own digest (the subject, independent of any assertions
    /// that were added after signing).
    pub fn verify_signature_from(&self, verifier: &SigningPublicKey) -> Result<()> {
        let message = self.subject().digest().data().to_vec();
        let signed = Envelope::new_known_value(known_values::SIGNED);
        for assertion in self.assertions_with_predicate(&signed) {
            let object = match assertion.case() {
                crate::envelope::Case::Assertion(_, object) => object.clone(),
                _ => continue,
            };
            if let Ok(cbor) = object.leaf() {
                if let Ok(signature) = signature_from_cbor(&cbor) {
                    if verifier.verify(&signature, &message).is_ok() {
                        return Ok(());
                    }
                }
            }
        }
        Err(Error::General("no `signed` assertion verifies against this subject".into()))
    }
}

fn signature_to_cbor(signature: &Signature) -> CBOR {
    signature.clone().into()
}

fn signature_from_cbor(cbor: &CBOR) -> Result<Signature> {
    Signature::try_from(cbor.clone()).map_err(|e: dcbor::Error| Error::General(e.to_string()))
}
