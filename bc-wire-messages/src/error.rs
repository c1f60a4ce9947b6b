#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("message is shorter than the fixed version byte and MAC tag require")]
    Truncated,
    #[error("field {field} used unsupported wire type {wire_type}")]
    UnsupportedWireType { field: u32, wire_type: u8 },
    #[error("expected DJB type prefix 0x05 on the ratchet public key, found {found:#04x}")]
    InvalidKeyTypePrefix { found: u8 },
    #[error("ratchet public key field must be {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
    #[error("trailing bytes after the last recognized field")]
    TrailingData,
    #[error("required field {field} was not present")]
    MissingField { field: &'static str },
}

pub type Result<T> = core::result::Result<T, Error>;
