use std::sync::Arc;

use bc_components::{Compressed, Digest, EncryptedMessage};
use bc_known_values::KnownValue;
use dcbor::prelude::*;

use crate::error::{Error, Result};

/// The recursive Merkle-DAG document type. Cheap to clone: every instance
/// is an `Arc` over its case, so "modifying" operations that share
/// unmodified subtrees are just new `Arc`s pointing at the old ones.
#[derive(Clone)]
pub struct Envelope(Arc<EnvelopeCase>);

enum EnvelopeCase {
    Leaf { cbor: CBOR, digest: Digest },
    KnownValue { value: KnownValue, digest: Digest },
    Wrapped { inner: Envelope, digest: Digest },
    Assertion { predicate: Envelope, object: Envelope, digest: Digest },
    Node { subject: Envelope, assertions: Vec<Envelope>, digest: Digest },
    Elided(Digest),
    Encrypted { message: EncryptedMessage, digest: Digest },
    Compressed { compressed: Compressed, digest: Digest },
}

/// A borrowed view of an envelope's variant, for pattern matching by
/// callers without exposing the internal `Arc` wrapper.
pub enum Case<'a> {
    Leaf(&'a CBOR),
    KnownValue(KnownValue),
    Wrapped(&'a Envelope),
    Assertion(&'a Envelope, &'a Envelope),
    Node(&'a Envelope, &'a [Envelope]),
    Elided(Digest),
    Encrypted(&'a EncryptedMessage),
    Compressed(&'a Compressed),
}

fn leaf_digest(cbor: &CBOR) -> Digest {
    let mut buf = b"LEAF".to_vec();
    buf.extend_from_slice(&cbor.to_cbor_data());
    Digest::from_image(buf)
}

fn known_value_digest(value: u64) -> Digest {
    let mut buf = b"KNOWN".to_vec();
    buf.extend_from_slice(&value.to_be_bytes());
    Digest::from_image(buf)
}

fn wrapped_digest(inner: &Digest) -> Digest {
    let mut buf = b"WRAP".to_vec();
    buf.extend_from_slice(inner.data());
    Digest::from_image(buf)
}

fn assertion_digest(predicate: &Digest, object: &Digest) -> Digest {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(predicate.data());
    buf.extend_from_slice(object.data());
    Digest::from_image(buf)
}

fn node_digest(subject: &Digest, assertions: &[Envelope]) -> Digest {
    let mut buf = Vec::with_capacity(32 + assertions.len() * 32);
    buf.extend_from_slice(subject.data());
    for a in assertions {
        buf.extend_from_slice(a.digest().data());
    }
    Digest::from_image(buf)
}

/// Sorts by digest and removes exact duplicates, per invariant (I2).
fn normalize_assertions(mut assertions: Vec<Envelope>) -> Vec<Envelope> {
    assertions.sort_by(|a, b| a.digest().cmp(&b.digest()));
    assertions.dedup_by(|a, b| a.digest() == b.digest());
    assertions
}

impl Envelope {
    /// Wraps a dCBOR-encodable value as a leaf envelope.
    pub fn new(value: impl Into<CBOR>) -> Self {
        let cbor = value.into();
        let digest = leaf_digest(&cbor);
        Envelope(Arc::new(EnvelopeCase::Leaf { cbor, digest }))
    }

    /// Wraps a known value (a compact codepoint standing for an
    /// ontological concept such as `isA` or `note`) as its own case,
    /// distinct from a leaf carrying the same integer.
    pub fn new_known_value(value: impl Into<KnownValue>) -> Self {
        let value = value.into();
        let digest = known_value_digest(value.value());
        Envelope(Arc::new(EnvelopeCase::KnownValue { value, digest }))
    }

    pub(crate) fn new_elided(digest: Digest) -> Self {
        Envelope(Arc::new(EnvelopeCase::Elided(digest)))
    }

    pub(crate) fn new_encrypted(message: EncryptedMessage, digest: Digest) -> Self {
        Envelope(Arc::new(EnvelopeCase::Encrypted { message, digest }))
    }

    pub(crate) fn new_compressed(compressed: Compressed, digest: Digest) -> Self {
        Envelope(Arc::new(EnvelopeCase::Compressed { compressed, digest }))
    }

    /// Wraps this whole envelope as the subject of a new `Wrapped` envelope.
    pub fn wrap(&self) -> Envelope {
        let digest = wrapped_digest(&self.digest());
        Envelope(Arc::new(EnvelopeCase::Wrapped { inner: self.clone(), digest }))
    }

    /// Unwraps a `Wrapped` envelope, failing on any other case.
    pub fn try_unwrap(&self) -> Result<Envelope> {
        match self.case() {
            Case::Wrapped(inner) => Ok(inner.clone()),
            _ => Err(Error::TypeMismatch),
        }
    }

    pub(crate) fn new_assertion(predicate: Envelope, object: Envelope) -> Envelope {
        let digest = assertion_digest(&predicate.digest(), &object.digest());
        Envelope(Arc::new(EnvelopeCase::Assertion { predicate, object, digest }))
    }

    /// Builds a `Node` from a subject and a non-empty, already-deduplicated
    /// and digest-sorted assertion list. Internal: callers go through
    /// [`Envelope::add_assertion`] / [`Envelope::add_assertion_envelope`],
    /// which enforce invariant (I1) that a Node always has at least one
    /// assertion.
    fn new_node(subject: Envelope, assertions: Vec<Envelope>) -> Envelope {
        debug_assert!(!assertions.is_empty());
        let digest = node_digest(&subject.digest(), &assertions);
        Envelope(Arc::new(EnvelopeCase::Node { subject, assertions, digest }))
    }

    /// Reconstructs a `Node` from decoded parts, validating that the
    /// assertion list arrived already sorted and deduplicated by digest
    /// (the canonical form per invariant (I4)).
    pub(crate) fn from_parts_node(subject: Envelope, assertions: Vec<Envelope>) -> Result<Envelope> {
        if assertions.is_empty() {
            return Err(Error::NonCanonical);
        }
        let normalized = normalize_assertions(assertions.clone());
        if normalized.len() != assertions.len()
            || !normalized.iter().zip(assertions.iter()).all(|(a, b)| a.digest() == b.digest())
        {
            return Err(Error::NonCanonical);
        }
        Ok(Envelope::new_node(subject, assertions))
    }

    /// Adds an assertion `predicate: object`. If this envelope is not
    /// already a `Node`, it is promoted to one with itself as subject.
    /// Assertions with a duplicate digest are silently deduplicated.
    pub fn add_assertion(&self, predicate: Envelope, object: Envelope) -> Envelope {
        self.add_assertion_envelope(Envelope::new_assertion(predicate, object))
    }

    /// Adds an already-built assertion envelope (must itself be of case
    /// `Assertion`; used internally by the extension modules, which build
    /// assertions such as `'signed': signature` directly).
    pub fn add_assertion_envelope(&self, assertion: Envelope) -> Envelope {
        match self.case() {
            Case::Node(subject, assertions) => {
                let mut list = assertions.to_vec();
                list.push(assertion);
                Envelope::new_node(subject.clone(), normalize_assertions(list))
            }
            _ => Envelope::new_node(self.clone(), vec![assertion]),
        }
    }

    /// The subject: the stored subject if this is a `Node`, otherwise the
    /// envelope itself.
    pub fn subject(&self) -> Envelope {
        match self.case() {
            Case::Node(subject, _) => subject.clone(),
            _ => self.clone(),
        }
    }

    /// All assertions on this envelope, in digest order. Empty unless this
    /// is a `Node`.
    pub fn assertions(&self) -> Vec<Envelope> {
        match self.case() {
            Case::Node(_, assertions) => assertions.to_vec(),
            _ => Vec::new(),
        }
    }

    /// Assertions whose predicate has the given digest.
    pub fn assertions_with_predicate(&self, predicate: &Envelope) -> Vec<Envelope> {
        self.assertions()
            .into_iter()
            .filter(|a| matches!(a.case(), Case::Assertion(p, _) if p.digest() == predicate.digest()))
            .collect()
    }

    /// The object of the first assertion matching `predicate`, if any.
    pub fn object_for_predicate(&self, predicate: &Envelope) -> Option<Envelope> {
        self.assertions_with_predicate(predicate).first().map(|a| match a.case() {
            Case::Assertion(_, object) => object.clone(),
            _ => unreachable!("assertions_with_predicate only returns Assertion cases"),
        })
    }

    pub fn digest(&self) -> Digest {
        match &*self.0 {
            EnvelopeCase::Leaf { digest, .. } => *digest,
            EnvelopeCase::KnownValue { digest, .. } => *digest,
            EnvelopeCase::Wrapped { digest, .. } => *digest,
            EnvelopeCase::Assertion { digest, .. } => *digest,
            EnvelopeCase::Node { digest, .. } => *digest,
            EnvelopeCase::Elided(digest) => *digest,
            EnvelopeCase::Encrypted { digest, .. } => *digest,
            EnvelopeCase::Compressed { digest, .. } => *digest,
        }
    }

    pub fn case(&self) -> Case<'_> {
        match &*self.0 {
            EnvelopeCase::Leaf { cbor, .. } => Case::Leaf(cbor),
            EnvelopeCase::KnownValue { value, .. } => Case::KnownValue(*value),
            EnvelopeCase::Wrapped { inner, .. } => Case::Wrapped(inner),
            EnvelopeCase::Assertion { predicate, object, .. } => Case::Assertion(predicate, object),
            EnvelopeCase::Node { subject, assertions, .. } => Case::Node(subject, assertions),
            EnvelopeCase::Elided(digest) => Case::Elided(*digest),
            EnvelopeCase::Encrypted { message, .. } => Case::Encrypted(message),
            EnvelopeCase::Compressed { compressed, .. } => Case::Compressed(compressed),
        }
    }

    /// The leaf's CBOR value, failing on any other case.
    pub fn leaf(&self) -> Result<CBOR> {
        match self.case() {
            Case::Leaf(cbor) => Ok(cbor.clone()),
            _ => Err(Error::TypeMismatch),
        }
    }

    /// True for the three obscured cases (`Elided`/`Encrypted`/`Compressed`),
    /// which carry only a digest-preserving stand-in for their content.
    pub fn is_obscured(&self) -> bool {
        matches!(self.case(), Case::Elided(_) | Case::Encrypted(_) | Case::Compressed(_))
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.digest() == other.digest()
    }
}

impl Eq for Envelope {}

impl core::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Envelope({})", self.digest().short_description())
    }
}
