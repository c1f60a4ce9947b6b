//! Signal-compatible wire framing: packs a ratchet session's messages into
//! the fixed version-byte + protobuf-shaped + trailing-MAC layout used by
//! the reference implementation, and parses it back.

mod error;
mod signal_message;
mod varint;
mod wire;

pub use error::{Error, Result};
pub use signal_message::SignalMessage;
