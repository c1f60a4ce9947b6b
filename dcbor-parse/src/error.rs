#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unexpected end of input while parsing diagnostic notation")]
    UnexpectedEnd,
    #[error("unexpected character '{0}' at byte offset {1}")]
    UnexpectedChar(char, usize),
    #[error("malformed number literal: {0}")]
    MalformedNumber(String),
    #[error("malformed byte-string literal: {0}")]
    MalformedByteString(String),
    #[error("unterminated text string")]
    UnterminatedString,
    #[error("expected '{0}' but found '{1}'")]
    Expected(char, String),
    #[error("trailing characters after a complete value: '{0}'")]
    TrailingInput(String),
    #[error(transparent)]
    Cbor(#[from] dcbor::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
