//! Uniform Resource (UR): a URI-safe typed CBOR wrapper, `ur:<type>/<bytewords>`.

mod error;
pub use error::{Error, Result};

pub mod bytewords;

mod ur;
pub use ur::UR;

mod ur_codable;
pub use ur_codable::URCodable;
