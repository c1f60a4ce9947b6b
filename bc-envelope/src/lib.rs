//! Gordian Envelope: a Merkle-DAG document format over dCBOR.
//!
//! An [`Envelope`] is an immutable, content-addressed tree. Every node
//! carries a digest that identifies its content regardless of whether
//! that content is fully present, elided, encrypted, or compressed,
//! which is what makes selective disclosure possible: a holder can
//! redact or encrypt parts of a document and a verifier who already
//! knows the whole document's digest can still confirm the redacted
//! copy is a faithful partial view of it.

mod envelope;
mod cbor;
mod walk;
mod elide;
mod error;
mod tags;

#[cfg(feature = "signature")]
mod sign;
#[cfg(feature = "encrypt")]
mod encrypt;
#[cfg(feature = "compress")]
mod compress;
#[cfg(feature = "attachment")]
mod attachment;
#[cfg(feature = "sskr")]
mod sskr;

pub use envelope::{Case, Envelope};
pub use elide::ObscureAction;
pub use error::{Error, Result};
pub use tags::{register_tags, register_tags_in, TAG_ENVELOPE};
pub use walk::{EnvelopeEdge, Visitor};
pub use bc_ur::URCodable;

#[cfg(feature = "signature")]
pub use sign::SignatureMetadata;
#[cfg(feature = "encrypt")]
pub use encrypt::LockedEnvelope;
