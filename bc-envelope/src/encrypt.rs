//! Subject encryption and secret-locked content keys.
//!
//! `encrypt_subject`/`decrypt_subject` turn a subject into an `Encrypted`
//! envelope and back, under a caller-supplied [`SymmetricKey`]. The
//! pre-encryption digest rides as the AEAD's associated data (see
//! `cbor.rs`), so decoding an `Encrypted` case recovers the original
//! digest without ever needing the key.
//!
//! `lock_subject`/`unlock_subject` go one step further: the content key
//! itself is wrapped under one or more secrets (passwords, in practice),
//! each recorded as a `'hasSecret': EncryptedKey` assertion alongside the
//! `Encrypted` subject, so that any one of several secrets can unlock it.

use bc_components::{EncryptedKey, KdfMethod, SymmetricKey};
use bc_known_values::known_values;
use dcbor::prelude::*;

use crate::envelope::{Case, Envelope};
use crate::error::{Error, Result};

/// An envelope whose subject has been encrypted and locked behind one or
/// more secrets, returned by [`Envelope::lock`] pending the caller's
/// choice of which additional secrets to add before finalizing.
pub struct LockedEnvelope {
    envelope: Envelope,
}

impl LockedEnvelope {
    pub fn into_envelope(self) -> Envelope {
        self.envelope
    }
}

impl Envelope {
    /// Replaces this envelope with an `Encrypted` case holding the same
    /// digest, AEAD-sealed under `key`.
    pub fn encrypt_subject(&self, key: &SymmetricKey) -> Envelope {
        let digest = self.digest();
        let plaintext = self.tagged_cbor().to_cbor_data();
        let message = key.encrypt(&plaintext, digest.data());
        Envelope::new_encrypted(message, digest)
    }

    /// Reverses [`Envelope::encrypt_subject`], failing if this envelope is
    /// not an `Encrypted` case or if `key` does not match.
    pub fn decrypt_subject(&self, key: &SymmetricKey) -> Result<Envelope> {
        let message = match self.case() {
            Case::Encrypted(message) => message.clone(),
            _ => return Err(Error::TypeMismatch),
        };
        let plaintext = key.decrypt(&message).map_err(Error::Components)?;
        let cbor = CBOR::from_data(&plaintext)?;
        let envelope = Envelope::from_tagged_cbor(&cbor)?;
        if envelope.digest() != self.digest() {
            return Err(Error::InvalidData("decrypted subject digest mismatch".into()));
        }
        Ok(envelope)
    }

    /// Encrypts the subject under a fresh content key, then wraps that key
    /// behind `secret` via `method`, recording the wrapped key as a
    /// `'hasSecret'` assertion. Call [`LockedEnvelope::into_envelope`]
    /// directly for a single secret, or add further `'hasSecret'`
    /// assertions (via further calls to [`Envelope::lock`] against the
    /// same content key material) before finalizing for several.
    pub fn lock(&self, method: KdfMethod, secret: &[u8]) -> Result<LockedEnvelope> {
        let content_key = SymmetricKey::new_random();
        let encrypted = self.encrypt_subject(&content_key);
        let locked_key = EncryptedKey::lock(method, secret, &content_key).map_err(Error::Components)?;
        let envelope = encrypted.add_assertion(
            Envelope::new_known_value(known_values::HAS_SECRET),
            Envelope::new(locked_key_to_cbor(&locked_key)),
        );
        Ok(LockedEnvelope { envelope })
    }

    /// Tries every `'hasSecret'` assertion in turn, unlocking the content
    /// key and decrypting the subject with the first one `secret` opens.
    /// Per-attempt failures are logged and swallowed; only the aggregate
    /// failure is surfaced.
    pub fn unlock(&self, secret: &[u8]) -> Result<Envelope> {
        let has_secret = Envelope::new_known_value(known_values::HAS_SECRET);
        let mut tried = 0usize;
        for assertion in self.assertions_with_predicate(&has_secret) {
            tried += 1;
            let object = match assertion.case() {
                Case::Assertion(_, object) => object.clone(),
                _ => continue,
            };
            let cbor = match object.leaf() {
                Ok(cbor) => cbor,
                Err(_) => continue,
            };
            let locked_key = match locked_key_from_cbor(&cbor) {
                Ok(k) => k,
                Err(e) => {
                    tracing::debug!(error = %e, "hasSecret assertion did not decode as an EncryptedKey");
                    continue;
                }
            };
            match locked_key.unlock(secret) {
                Ok(content_key) => return self.subject().decrypt_subject(&content_key),
                Err(e) => {
                    tracing::debug!(error = %e, "secret did not unlock this hasSecret assertion");
                }
            }
        }
        tracing::debug!(attempts = tried, "no hasSecret assertion was unlocked by the given secret");
        Err(Error::NoMatchingSecret)
    }
}

fn locked_key_to_cbor(key: &EncryptedKey) -> CBOR {
    key.clone().into()
}

fn locked_key_from_cbor(cbor: &CBOR) -> Result<EncryptedKey> {
    EncryptedKey::try_from(cbor.clone()).map_err(|e: dcbor::Error| Error::InvalidData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_crypto::Pbkdf2Params;

    #[test]
    fn encrypt_decrypt_subject_round_trip() {
        let key = SymmetricKey::new_random();
        let envelope = Envelope::new("Hello").add_assertion(
            Envelope::new_known_value(known_values::NOTE),
            Envelope::new("world"),
        );
        let encrypted = envelope.encrypt_subject(&key);
        assert!(encrypted.is_obscured());
        assert_eq!(encrypted.digest(), envelope.digest());
        let decrypted = encrypted.decrypt_subject(&key).unwrap();
        assert_eq!(decrypted.digest(), envelope.digest());
    }

    #[test]
    fn wrong_key_fails_to_decrypt() {
        let key = SymmetricKey::new_random();
        let other = SymmetricKey::new_random();
        let envelope = Envelope::new("Hello");
        let encrypted = envelope.encrypt_subject(&key);
        assert!(encrypted.decrypt_subject(&other).is_err());
    }

    #[test]
    fn lock_unlock_round_trip() {
        let envelope = Envelope::new("Hello");
        let method = KdfMethod::Pbkdf2(Pbkdf2Params::new(b"salt".to_vec(), 1000));
        let locked = envelope.lock(method, b"hunter2").unwrap().into_envelope();
        let unlocked = locked.unlock(b"hunter2").unwrap();
        assert_eq!(unlocked.digest(), envelope.digest());
    }

    #[test]
    fn wrong_secret_fails_to_unlock() {
        let envelope = Envelope::new("Hello");
        let method = KdfMethod::Pbkdf2(Pbkdf2Params::new(b"salt".to_vec(), 1000));
        let locked = envelope.lock(method, b"hunter2").unwrap().into_envelope();
        assert!(matches!(locked.unlock(b"wrong"), Err(Error::NoMatchingSecret)));
    }
}
