#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("group threshold must be between 1 and the number of groups")]
    InvalidGroupThreshold,
    #[error("member threshold must be between 1 and the member count")]
    InvalidMemberThreshold,
    #[error("secret must be between 16 and 32 bytes and have an even length")]
    InvalidSecretLength,
    #[error("not enough shares to meet the group threshold")]
    NotEnoughGroups,
    #[error("not enough member shares to reconstruct a group secret")]
    NotEnoughMemberShares,
    #[error("shares from different splits cannot be combined (identifier mismatch)")]
    IdentifierMismatch,
    #[error("shares disagree on share-value length")]
    InconsistentShareLength,
    #[error("malformed SSKR share: {0}")]
    Malformed(String),
}

pub type Result<T> = core::result::Result<T, Error>;
