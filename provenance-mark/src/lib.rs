//! Forward-chained provenance marks: each mark commits, via a SHA-256
//! hash, to the key of the mark before it, so publishing mark `i+1`
//! retroactively proves whoever produced it already held mark `i`'s key.
//! Chain validation groups marks by chain identifier and checks hash
//! continuity, sequence contiguity, and date ordering; it reports
//! structured violations rather than formatted text.

mod cbor;
mod error;
mod mark;
mod resolution;
mod tags;
mod validate;

pub use error::{Error, Result};
pub use mark::ProvenanceMark;
pub use resolution::Resolution;
pub use tags::{register_tags, register_tags_in, TAG_PROVENANCE_MARK};
pub use validate::{validate_chains, ValidationResult, Violation};
