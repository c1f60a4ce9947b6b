//! Canonical CBOR tags for this crate's types, registered into the
//! process-wide tag table the same way the teacher's own
//! `dcbor::tags::register_tags_in` seeds `GLOBAL_TAGS`.

use dcbor::prelude::*;

pub const TAG_SEED: u64 = 40000;
pub const TAG_DIGEST: u64 = 40001;
pub const TAG_NONCE: u64 = 40004;
pub const TAG_SIGNING_PRIVATE_KEY: u64 = 40014;
pub const TAG_SIGNING_PUBLIC_KEY: u64 = 40015;
pub const TAG_PUBLIC_KEYS: u64 = 40017;
// spec.md's tag table lists both PrivateKeys and Salt under 40018; since
// the two types are unrelated, PrivateKeys is assigned the neighboring
// unused value instead of colliding with Salt (see DESIGN.md).
pub const TAG_PRIVATE_KEYS: u64 = 40016;
pub const TAG_SALT: u64 = 40018;
pub const TAG_SEALED_MESSAGE: u64 = 40019;
pub const TAG_SIGNATURE: u64 = 40020;
pub const TAG_ENCRYPTED_KEY: u64 = 40021;
pub const TAG_XID: u64 = 40024;
pub const TAG_ARID: u64 = 40012;
pub const TAG_PRIVATE_KEY_BASE: u64 = 40013;
pub const TAG_X25519_PRIVATE_KEY: u64 = 40010;
pub const TAG_X25519_PUBLIC_KEY: u64 = 40011;
pub const TAG_SSKR_SHARE: u64 = 40309;
pub const TAG_SSKR_SHARE_LEGACY: u64 = 309;
pub const TAG_URI: u64 = 32;
pub const TAG_UUID: u64 = 37;
pub const TAG_COMPRESSED: u64 = 40005;
pub const TAG_ENCRYPTED_MESSAGE: u64 = 40002;
pub const TAG_SYMMETRIC_KEY: u64 = 40003;

/// Registers every tag this crate defines into `tags`. Mirrors the
/// teacher's own `register_tags_in` pattern (`dcbor::tags`), so a
/// consuming binary can call this once at startup alongside the other
/// crates' registration functions.
pub fn register_tags_in(tags: &mut dcbor::tags::TagsStore) {
    let entries: &[(u64, &str)] = &[
        (TAG_SEED, "seed"),
        (TAG_DIGEST, "digest"),
        (TAG_NONCE, "nonce"),
        (TAG_PRIVATE_KEY_BASE, "crypto-prvkey-base"),
        (TAG_SIGNING_PRIVATE_KEY, "signing-private-key"),
        (TAG_SIGNING_PUBLIC_KEY, "signing-public-key"),
        (TAG_PUBLIC_KEYS, "crypto-pubkeys"),
        (TAG_PRIVATE_KEYS, "crypto-prvkeys"),
        (TAG_SALT, "salt"),
        (TAG_SEALED_MESSAGE, "crypto-sealed"),
        (TAG_SIGNATURE, "signature"),
        (TAG_ENCRYPTED_KEY, "crypto-encrypted-key"),
        (TAG_SYMMETRIC_KEY, "crypto-key"),
        (TAG_XID, "xid"),
        (TAG_ARID, "arid"),
        (TAG_X25519_PRIVATE_KEY, "agreement-private-key"),
        (TAG_X25519_PUBLIC_KEY, "agreement-public-key"),
        (TAG_SSKR_SHARE, "sskr"),
        (TAG_SSKR_SHARE_LEGACY, "sskr-legacy"),
        (TAG_COMPRESSED, "compressed"),
        (TAG_ENCRYPTED_MESSAGE, "encrypted"),
    ];
    for (value, name) in entries {
        tags.insert(Tag::new(*value, *name));
    }
}

pub fn register_tags() {
    dcbor::tags::with_tags_mut!(|tags: &mut dcbor::tags::TagsStore| {
        register_tags_in(tags);
    });
}
