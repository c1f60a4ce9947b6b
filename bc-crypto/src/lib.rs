//! Hash, HMAC, HKDF, AEAD, and signature/KEM primitives shared by the rest
//! of the workspace. Every operation that needs randomness takes a
//! [`RandomNumberGenerator`] rather than reaching for a global RNG, so
//! tests can supply deterministic bytes.

mod error;
pub use error::{Error, Result};

mod rng;
pub use rng::{RandomNumberGenerator, SecureRandomNumberGenerator, TestRandomNumberGenerator};

mod hash;
pub use hash::{sha256, sha512, SHA256_SIZE, SHA512_SIZE};

mod hmac_hkdf;
pub use hmac_hkdf::{hkdf_sha256, hmac_sha256, hmac_sha512};

mod aead;
pub use aead::{
    aead_chacha20_poly1305_decrypt, aead_chacha20_poly1305_encrypt, random_nonce,
    KEY_SIZE as AEAD_KEY_SIZE, NONCE_SIZE as AEAD_NONCE_SIZE,
};

mod compression;
pub use compression::{crc32, deflate, inflate, DEFAULT_LEVEL};

mod x25519;
pub use x25519::{
    validate_public_key as x25519_validate_public_key, x25519_public_key, x25519_shared_secret,
    KEY_SIZE as X25519_KEY_SIZE,
};

mod ed25519;
pub use ed25519::{
    ed25519_new_private_key, ed25519_public_key_from_private, ed25519_sign, ed25519_verify,
    PRIVATE_KEY_SIZE as ED25519_PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE as ED25519_PUBLIC_KEY_SIZE,
    SIGNATURE_SIZE as ED25519_SIGNATURE_SIZE,
};

mod secp256k1;
pub use secp256k1::{
    ecdsa_public_key_from_private, ecdsa_sign, ecdsa_verify, schnorr_public_key_from_private,
    schnorr_sign, schnorr_verify, secp256k1_new_private_key,
    ECDSA_PUBLIC_KEY_SIZE, ECDSA_SIGNATURE_SIZE, SCHNORR_PUBLIC_KEY_SIZE, SCHNORR_SIGNATURE_SIZE,
};

mod kdf;
pub use kdf::{
    argon2id_derive, pbkdf2_sha256, scrypt_derive, Argon2idParams, Pbkdf2Params, ScryptKdfParams,
};
