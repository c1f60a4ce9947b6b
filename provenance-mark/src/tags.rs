//! This crate's own CBOR tag, registered the same way `bc-components::tags`
//! seeds the process-wide tag table.

use dcbor::prelude::*;

pub const TAG_PROVENANCE_MARK: u64 = 40006;

pub fn register_tags_in(tags: &mut dcbor::tags::TagsStore) {
    tags.insert(Tag::new(TAG_PROVENANCE_MARK, "provenance-mark"));
}

pub fn register_tags() {
    dcbor::tags::with_tags_mut!(|tags: &mut dcbor::tags::TagsStore| {
        register_tags_in(tags);
    });
}
