use crate::byte_newtype::fixed_width_byte_type;
use crate::tags::TAG_SEED;

fixed_width_byte_type!(Seed, 16, TAG_SEED, "seed");
