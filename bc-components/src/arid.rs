use crate::byte_newtype::fixed_width_byte_type;
use crate::tags::TAG_ARID;

fixed_width_byte_type!(ARID, 32, TAG_ARID, "arid");
