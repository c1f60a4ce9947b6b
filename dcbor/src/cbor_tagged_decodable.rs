use crate::{CBORCase, CBORTagged, Error, Result, CBOR};

/// A type that can be decoded from CBOR with a specific tag.
///
/// Typically types that implement this trait will only provide
/// [`CBORTagged::cbor_tags`] and
/// [`CBORTaggedDecodable::from_untagged_cbor`].
pub trait CBORTaggedDecodable: CBORTagged {
    /// Creates an instance of this type by decoding it from untagged CBOR.
    fn from_untagged_cbor(cbor: &CBOR) -> Result<Self> where Self: Sized;

    /// Creates an instance of this type by decoding it from tagged CBOR.
    ///
    /// Any of the tags returned by [`CBORTagged::cbor_tags`] is accepted.
    fn from_tagged_cbor(cbor: &CBOR) -> Result<Self> where Self: Sized {
        match cbor.as_case() {
            CBORCase::Tagged(tag, item) => {
                if Self::cbor_tags().iter().any(|t| t == tag) {
                    Self::from_untagged_cbor(item)
                } else {
                    Err(Error::WrongTag(Self::cbor_tags()[0].clone(), tag.clone()))
                }
            }
            _ => Err(Error::WrongType),
        }
    }

    /// Creates an instance of this type by decoding it from binary encoded tagged CBOR.
    fn from_tagged_cbor_data(data: impl AsRef<[u8]>) -> Result<Self> where Self: Sized {
        Self::from_tagged_cbor(&CBOR::from_data(data)?)
    }

    /// Creates an instance of this type by decoding it from binary encoded untagged CBOR.
    fn from_untagged_cbor_data(data: impl AsRef<[u8]>) -> Result<Self> where Self: Sized {
        Self::from_untagged_cbor(&CBOR::from_data(data)?)
    }
}
