//! Double-ratchet session state machine: X3DH initialization, forward-secret
//! send/receive with out-of-order tolerance, and DH-ratchet steps.

mod chain;
mod constants;
mod error;
mod plaintext;
mod session;
mod store;
mod x3dh;

pub use chain::{ChainKey, MessageKey, MessageKeyMaterial};
pub use constants::{CURRENT_VERSION, MAX_FORWARD_JUMPS, MIN_SUPPORTED_VERSION};
pub use error::{Error, Result};
pub use plaintext::{PlaintextContent, PlaintextReason};
pub use session::{RatchetMessage, RatchetSession, SessionState};
pub use store::{ArchivedState, ReceiverChain};
pub use x3dh::{alice_init, bob_init, AliceParams, BobParams, X3dhOutput};
