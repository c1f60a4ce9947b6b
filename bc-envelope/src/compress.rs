//! Subject compression: a `Compressed` case carries no secret, so its
//! digest is recovered on decode by decompressing and re-parsing (see
//! `cbor.rs`) rather than by any stored side channel.

use bc_components::Compressed;
use dcbor::prelude::*;

use crate::envelope::{Case, Envelope};
use crate::error::{Error, Result};

impl Envelope {
    /// Replaces this envelope with a `Compressed` case holding the same
    /// digest.
    pub fn compress_subject(&self) -> Envelope {
        let digest = self.digest();
        let plaintext = self.tagged_cbor().to_cbor_data();
        let compressed = Compressed::from_decompressed(&plaintext);
        Envelope::new_compressed(compressed, digest)
    }

    /// Reverses [`Envelope::compress_subject`], failing if this envelope is
    /// not a `Compressed` case.
    pub fn decompress_subject(&self) -> Result<Envelope> {
        let compressed = match self.case() {
            Case::Compressed(compressed) => compressed.clone(),
            _ => return Err(Error::TypeMismatch),
        };
        let bytes = compressed.decompress().map_err(Error::Components)?;
        let cbor = CBOR::from_data(&bytes)?;
        let envelope = Envelope::from_tagged_cbor(&cbor)?;
        if envelope.digest() != self.digest() {
            return Err(Error::InvalidData("decompressed subject digest mismatch".into()));
        }
        Ok(envelope)
    }
}
