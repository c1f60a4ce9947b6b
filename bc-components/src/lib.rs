//! Typed cryptographic components over dCBOR: digests, identifiers, keys,
//! signatures, encrypted and sealed messages, and SSKR shares. Every type
//! here implements `dcbor`'s `CBORTagged*` trio and therefore also
//! `bc_ur::URCodable` (`ur_string()` / `from_ur_string()`) for free.

mod error;
pub use error::{Error, Result};

pub mod tags;

mod byte_newtype;

mod digest;
pub use digest::Digest;

mod arid;
pub use arid::ARID;

mod nonce;
pub use nonce::Nonce;

mod seed;
pub use seed::Seed;

mod salt;
pub use salt::Salt;

mod symmetric_key;
pub use symmetric_key::SymmetricKey;

mod signing_key;
pub use signing_key::{SigningPrivateKey, SigningPublicKey, SigningScheme};

mod signature;
pub use signature::Signature;

mod agreement_key;
pub use agreement_key::{AgreementPrivateKey, AgreementPublicKey, AgreementScheme};

mod encrypted_message;
pub use encrypted_message::EncryptedMessage;

mod encrypted_key;
pub use encrypted_key::{EncryptedKey, KdfMethod};

mod sealed_message;
pub use sealed_message::SealedMessage;

mod compressed;
pub use compressed::Compressed;

mod sskr_share;
pub use sskr_share::SSKRShare;

mod xid;
pub use xid::XID;

mod keys;
pub use keys::{PrivateKeys, PublicKeys};

mod private_key_base;
pub use private_key_base::PrivateKeyBase;

pub use bc_ur::URCodable;
