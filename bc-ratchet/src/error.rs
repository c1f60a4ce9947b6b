#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("message version {found} is outside the supported range [{min}, {max}]")]
    UnsupportedVersion { found: u8, min: u8, max: u8 },
    #[error("message authentication failed")]
    MacMismatch,
    #[error("message key for counter {counter} on this chain has already been consumed or evicted")]
    MessageTooOld { counter: u32 },
    #[error("forward jump of {requested} exceeds the {limit}-step bound")]
    ForwardJumpTooLarge { requested: u32, limit: u32 },
    #[error("DH output was all-zero (rejected low-order point)")]
    InvalidPublicKey,
    #[error("session is not in a state that supports this operation")]
    InvalidState,
    #[error(transparent)]
    Crypto(#[from] bc_crypto::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
