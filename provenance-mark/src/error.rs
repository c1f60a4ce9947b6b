#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{field} must be {expected} bytes for this resolution, got {actual}")]
    InvalidLength { field: &'static str, expected: usize, actual: usize },
    #[error("genesis mark must have seq 0")]
    GenesisSeqNotZero,
    #[error("genesis mark's key must equal its chain_id")]
    GenesisKeyMismatch,
    #[error(transparent)]
    Cbor(#[from] dcbor::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
