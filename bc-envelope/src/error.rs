#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("envelope is not the case this operation requires")]
    TypeMismatch,
    #[error("envelope CBOR violates canonical form")]
    NonCanonical,
    #[error("{0}")]
    InvalidData(String),
    #[error("signature scheme does not match the verifier")]
    LevelMismatch,
    #[error("no `hasSecret` assertion unlocked with the given secret")]
    NoMatchingSecret,
    #[error(transparent)]
    Crypto(#[from] bc_crypto::Error),
    #[error(transparent)]
    Components(#[from] bc_components::Error),
    #[error(transparent)]
    Cbor(#[from] dcbor::Error),
    #[error(transparent)]
    Sskr(#[from] bc_sskr::Error),
    #[error("{0}")]
    General(String),
}

pub type Result<T> = core::result::Result<T, Error>;
