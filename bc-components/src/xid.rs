use crate::byte_newtype::fixed_width_byte_type;
use crate::digest::Digest;
use crate::keys::PublicKeys;
use crate::tags::TAG_XID;

fixed_width_byte_type!(XID, 32, TAG_XID, "xid");

impl XID {
    /// A document's stable identifier: the digest of the canonical CBOR of
    /// its inception public-key set. Stable across later key rotations,
    /// since only the first key set ever contributes to it.
    pub fn from_inception_keys(keys: &PublicKeys) -> Self {
        use dcbor::CBORTaggedEncodable;
        let bytes = keys.tagged_cbor_data();
        let digest = Digest::from_image(&bytes);
        Self::from_bytes(*digest.data())
    }
}
