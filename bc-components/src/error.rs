#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("expected {0} bytes, got {1}")]
    InvalidLength(usize, usize),
    #[error("unknown discriminator {0} for {1}")]
    UnknownDiscriminator(u8, &'static str),
    #[error("wrong secret")]
    WrongSecret,
    #[error("scheme mismatch between private key and ciphertext")]
    SchemeMismatch,
    #[error(transparent)]
    Cbor(#[from] dcbor::Error),
    #[error(transparent)]
    Ur(#[from] bc_ur::Error),
    #[error(transparent)]
    Crypto(#[from] bc_crypto::Error),
    #[error(transparent)]
    Sskr(#[from] bc_sskr::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
