use crate::{CBORTagged, CBOR};

/// A type that can be encoded to CBOR with a specific tag.
///
/// Typically types that implement this trait will only provide
/// [`CBORTagged::cbor_tags`] and [`CBORTaggedEncodable::untagged_cbor`].
pub trait CBORTaggedEncodable: CBORTagged {
    /// Returns the untagged CBOR encoding of this instance.
    fn untagged_cbor(&self) -> CBOR;

    /// Returns the tagged CBOR encoding of this instance, using the first of
    /// [`CBORTagged::cbor_tags`].
    fn tagged_cbor(&self) -> CBOR {
        CBOR::tagged_value(Self::cbor_tags()[0].clone(), self.untagged_cbor())
    }

    /// Returns the tagged value in CBOR binary representation.
    fn tagged_cbor_data(&self) -> Vec<u8> {
        self.tagged_cbor().to_cbor_data()
    }
}
