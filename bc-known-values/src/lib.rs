//! A process-wide registry of known values: compact 64-bit codepoints
//! standing in for frequently used ontological concepts such as the `isA`
//! or `note` predicate in Gordian Envelope assertions.

mod error;
pub use error::{Error, Result};

mod known_value;
pub use known_value::{known_value_named, KnownValue, TAG_KNOWN_VALUE};

mod registry;

mod store;
pub use store::{
    with_known_values, with_known_values_mut, KnownValuesStore, GLOBAL_KNOWN_VALUES,
};

pub mod known_values {
    //! Convenience constants for the bundled well-known predicates.
    use crate::KnownValue;

    pub const IS_A: KnownValue = KnownValue::new(1);
    pub const ID: KnownValue = KnownValue::new(2);
    pub const NOTE: KnownValue = KnownValue::new(7);
    pub const SIGNED: KnownValue = KnownValue::new(9);
    pub const SSKR_SHARE: KnownValue = KnownValue::new(11);
    pub const DATE: KnownValue = KnownValue::new(21);
    pub const ATTACHMENT: KnownValue = KnownValue::new(25);
    pub const VENDOR: KnownValue = KnownValue::new(26);
    pub const CONFORMS_TO: KnownValue = KnownValue::new(27);
    pub const VERIFIED_BY: KnownValue = KnownValue::new(28);
    pub const HAS_SECRET: KnownValue = KnownValue::new(29);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_name_resolves() {
        assert_eq!(known_values::NOTE.name(), "note");
        assert_eq!(known_values::NOTE.value(), 7);
    }

    #[test]
    fn unknown_value_falls_back_to_decimal() {
        let kv = KnownValue::new(999_999);
        assert_eq!(kv.name(), "999999");
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(known_value_named("signed"), Some(known_values::SIGNED));
        assert_eq!(known_value_named("doesNotExist"), None);
    }

    #[test]
    fn cbor_round_trip() {
        let kv = known_values::SIGNED;
        let cbor: dcbor::CBOR = kv.into();
        assert_eq!(cbor.diagnostic(), "40000(9)");
        let back: KnownValue = cbor.try_into().unwrap();
        assert_eq!(back, kv);
    }
}
