#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("known value {0} is already registered under a different name: '{1}' vs '{2}'")]
    ConflictingName(u64, String, String),
    #[error(transparent)]
    Cbor(#[from] dcbor::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
