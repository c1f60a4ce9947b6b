use dcbor::prelude::*;

use crate::with_known_values;

pub const TAG_KNOWN_VALUE: u64 = 40000;

/// A compact 64-bit codepoint standing for a frequently used ontological
/// concept (e.g. the `isA` or `note` predicate). Equality is by value; the
/// human-readable name, if any, is resolved from the process-wide registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KnownValue(u64);

impl KnownValue {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The registered name, or the decimal string of the value if unknown.
    pub fn name(&self) -> String {
        with_known_values(|kv| kv.name_for_value(self.0))
    }
}

impl core::fmt::Display for KnownValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<u64> for KnownValue {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl CBORTagged for KnownValue {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_KNOWN_VALUE, "known-value")]
    }
}

impl CBORTaggedEncodable for KnownValue {
    fn untagged_cbor(&self) -> CBOR {
        self.0.into()
    }
}

impl CBORTaggedDecodable for KnownValue {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let value: u64 = cbor.clone().try_into()?;
        Ok(Self::new(value))
    }
}

impl From<KnownValue> for CBOR {
    fn from(kv: KnownValue) -> Self {
        kv.tagged_cbor()
    }
}

impl TryFrom<CBOR> for KnownValue {
    type Error = dcbor::Error;

    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

/// Looks up a known value by its registered name, for callers building
/// assertions that reference well-known predicates such as `note` or
/// `isA`.
pub fn known_value_named(name: &str) -> Option<KnownValue> {
    with_known_values(|kv| kv.value_for_name(name))
}
