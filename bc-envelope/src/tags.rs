//! The envelope's own CBOR tag, registered into the process-wide tag table
//! the same way `bc-components::tags` seeds `GLOBAL_TAGS`.

use dcbor::prelude::*;

pub const TAG_ENVELOPE: u64 = 200;

pub fn register_tags_in(tags: &mut dcbor::tags::TagsStore) {
    tags.insert(Tag::new(TAG_ENVELOPE, "envelope"));
}

pub fn register_tags() {
    dcbor::tags::with_tags_mut!(|tags: &mut dcbor::tags::TagsStore| {
        register_tags_in(tags);
    });
}
