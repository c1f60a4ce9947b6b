//! A lenient parser for dCBOR diagnostic notation, the mirror of
//! `dcbor::CBOR::diagnostic`'s writer. Output is always canonical dCBOR.

mod error;
pub use error::{Error, Result};

mod parser;
pub use parser::Parser;

use dcbor::CBOR;

/// Parses a string in dCBOR diagnostic notation into canonical CBOR.
pub fn parse_diagnostic(text: &str) -> Result<CBOR> {
    Parser::new(text).parse()
}
