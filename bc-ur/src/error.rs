#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid bytewords text: {0}")]
    InvalidBytewords(String),
    #[error("bytewords checksum mismatch")]
    ChecksumMismatch,
    #[error("UR string is missing the 'ur:' scheme prefix")]
    MissingScheme,
    #[error("UR type '{0}' is not a valid lowercase identifier")]
    InvalidType(String),
    #[error(transparent)]
    Cbor(#[from] dcbor::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
