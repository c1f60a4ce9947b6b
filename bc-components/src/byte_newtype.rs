/// Declares a fixed-width byte newtype with a CBOR tag, hex `Display`, and
/// the tagged-encode/decode trio every typed component in this crate needs.
/// Each of `Digest`, `ARID`, `Nonce`, `Seed`, and the X25519 key types is an
/// instance of exactly this shape, so it is factored into one macro rather
/// than copied six times by hand.
macro_rules! fixed_width_byte_type {
    ($name:ident, $size:expr, $tag_const:path, $tag_name:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $size]);

        impl $name {
            pub const SIZE: usize = $size;

            pub fn from_bytes(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            pub fn from_data(data: &[u8]) -> crate::Result<Self> {
                if data.len() != $size {
                    return Err(crate::Error::InvalidLength($size, data.len()));
                }
                let mut bytes = [0u8; $size];
                bytes.copy_from_slice(data);
                Ok(Self(bytes))
            }

            pub fn new_random() -> Self {
                Self::new_random_with_rng(&mut bc_crypto::SecureRandomNumberGenerator)
            }

            pub fn new_random_with_rng(
                rng: &mut dyn bc_crypto::RandomNumberGenerator,
            ) -> Self {
                let bytes = rng.random_bytes($size);
                let mut array = [0u8; $size];
                array.copy_from_slice(&bytes);
                Self(array)
            }

            pub fn data(&self) -> &[u8; $size] {
                &self.0
            }

            pub fn hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), &self.hex()[..8.min(self.hex().len())])
            }
        }

        impl dcbor::CBORTagged for $name {
            fn cbor_tags() -> Vec<dcbor::Tag> {
                vec![dcbor::Tag::new($tag_const, $tag_name)]
            }
        }

        impl dcbor::CBORTaggedEncodable for $name {
            fn untagged_cbor(&self) -> dcbor::CBOR {
                dcbor::CBOR::to_byte_string(self.0)
            }
        }

        impl dcbor::CBORTaggedDecodable for $name {
            fn from_untagged_cbor(cbor: &dcbor::CBOR) -> dcbor::Result<Self> {
                let bytes: Vec<u8> = cbor.clone().try_into()?;
                $name::from_data(&bytes)
                    .map_err(|_| dcbor::Error::Custom(format!(
                        "{} must be {} bytes", stringify!($name), $size
                    )))
            }
        }

        impl From<$name> for dcbor::CBOR {
            fn from(value: $name) -> Self {
                use dcbor::CBORTaggedEncodable;
                value.tagged_cbor()
            }
        }

        impl TryFrom<dcbor::CBOR> for $name {
            type Error = dcbor::Error;
            fn try_from(cbor: dcbor::CBOR) -> dcbor::Result<Self> {
                use dcbor::CBORTaggedDecodable;
                Self::from_tagged_cbor(&cbor)
            }
        }
    };
}

pub(crate) use fixed_width_byte_type;
