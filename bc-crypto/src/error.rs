#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("AEAD authentication failed")]
    AeadAuthentication,
    #[error("invalid key or nonce length")]
    InvalidSize,
    #[error("signature verification failed")]
    InvalidSignature,
    #[error("Diffie-Hellman output was all-zero")]
    AllZeroDh,
    #[error("X25519 public key is a low-order or non-canonical point")]
    InvalidPublicKey,
    #[error("DEFLATE/INFLATE failure")]
    Compression,
    #[error("CRC32 mismatch on decompression")]
    CrcMismatch,
    #[error("password-based key derivation failed: {0}")]
    Kdf(String),
}

pub type Result<T> = core::result::Result<T, Error>;
