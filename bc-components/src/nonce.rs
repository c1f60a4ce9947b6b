use crate::byte_newtype::fixed_width_byte_type;
use crate::tags::TAG_NONCE;

fixed_width_byte_type!(Nonce, 12, TAG_NONCE, "nonce");
