use dcbor::prelude::*;

use bc_crypto::{Argon2idParams, Pbkdf2Params, ScryptKdfParams};

use crate::error::{Error, Result};
use crate::nonce::Nonce;
use crate::symmetric_key::SymmetricKey;
use crate::tags::TAG_ENCRYPTED_KEY;

/// The key-derivation method an [`EncryptedKey`] was wrapped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdfMethod {
    Pbkdf2(Pbkdf2Params),
    Scrypt(ScryptKdfParams),
    Argon2id(Argon2idParams),
    SshAgent,
}

impl KdfMethod {
    fn discriminator(&self) -> u8 {
        match self {
            KdfMethod::Pbkdf2(_) => 0,
            KdfMethod::Scrypt(_) => 1,
            KdfMethod::Argon2id(_) => 2,
            KdfMethod::SshAgent => 3,
        }
    }

    fn derive(&self, secret: &[u8]) -> Result<[u8; 32]> {
        let bytes = match self {
            KdfMethod::Pbkdf2(params) => bc_crypto::pbkdf2_sha256(secret, params, 32),
            KdfMethod::Scrypt(params) => bc_crypto::scrypt_derive(secret, params, 32)?,
            KdfMethod::Argon2id(params) => bc_crypto::argon2id_derive(secret, params, 32)?,
            KdfMethod::SshAgent => {
                return Err(Error::UnknownDiscriminator(3, "SSHAgent unwrap requires an agent call"))
            }
        };
        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(array)
    }

    fn params_cbor(&self) -> CBOR {
        match self {
            KdfMethod::Pbkdf2(p) => {
                let mut m = Map::new();
                m.insert("salt", CBOR::to_byte_string(&p.salt));
                m.insert("iterations", p.iterations);
                m.into()
            }
            KdfMethod::Scrypt(p) => {
                let mut m = Map::new();
                m.insert("salt", CBOR::to_byte_string(&p.salt));
                m.insert("logN", p.log_n as u64);
                m.insert("r", p.r);
                m.insert("p", p.p);
                m.into()
            }
            KdfMethod::Argon2id(p) => {
                let mut m = Map::new();
                m.insert("salt", CBOR::to_byte_string(&p.salt));
                m.insert("memoryKiB", p.memory_kib);
                m.insert("iterations", p.iterations);
                m.insert("parallelism", p.parallelism);
                m.into()
            }
            KdfMethod::SshAgent => Map::new().into(),
        }
    }

    fn from_discriminator_and_params(discriminator: u8, params: &CBOR) -> Result<Self> {
        let map = match params.as_case() {
            CBORCase::Map(m) => m,
            _ => return Err(Error::InvalidLength(0, 0)),
        };
        Ok(match discriminator {
            0 => {
                let salt: Vec<u8> = map.extract("salt")?;
                let iterations: u32 = map.extract("iterations")?;
                KdfMethod::Pbkdf2(Pbkdf2Params::new(salt, iterations))
            }
            1 => {
                let salt: Vec<u8> = map.extract("salt")?;
                let log_n: u8 = map.extract("logN")?;
                let r: u32 = map.extract("r")?;
                let p: u32 = map.extract("p")?;
                KdfMethod::Scrypt(ScryptKdfParams::new(salt, log_n, r, p))
            }
            2 => {
                let salt: Vec<u8> = map.extract("salt")?;
                let memory_kib: u32 = map.extract("memoryKiB")?;
                let iterations: u32 = map.extract("iterations")?;
                let parallelism: u32 = map.extract("parallelism")?;
                KdfMethod::Argon2id(Argon2idParams::new(salt, memory_kib, iterations, parallelism))
            }
            3 => KdfMethod::SshAgent,
            other => return Err(Error::UnknownDiscriminator(other, "KdfMethod")),
        })
    }
}

/// A content key wrapped under a password- or agent-derived key: AEAD
/// ciphertext of the content key plus the method and parameters needed to
/// re-derive the wrap-key from the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedKey {
    method: KdfMethod,
    nonce: Nonce,
    ciphertext: Vec<u8>,
}

impl EncryptedKey {
    pub fn lock(method: KdfMethod, secret: &[u8], content_key: &SymmetricKey) -> Result<Self> {
        let wrap_key = method.derive(secret)?;
        let nonce = Nonce::new_random();
        let ciphertext = bc_crypto::aead_chacha20_poly1305_encrypt(
            &wrap_key,
            nonce.data(),
            content_key.data(),
            b"",
        );
        Ok(Self { method, nonce, ciphertext })
    }

    pub fn unlock(&self, secret: &[u8]) -> Result<SymmetricKey> {
        let wrap_key = self.method.derive(secret)?;
        let plaintext = bc_crypto::aead_chacha20_poly1305_decrypt(
            &wrap_key,
            self.nonce.data(),
            &self.ciphertext,
            b"",
        )
        .map_err(|_| Error::WrongSecret)?;
        let mut bytes = [0u8; 32];
        if plaintext.len() != 32 {
            return Err(Error::InvalidLength(32, plaintext.len()));
        }
        bytes.copy_from_slice(&plaintext);
        Ok(SymmetricKey::from_bytes(bytes))
    }

    pub fn method(&self) -> &KdfMethod {
        &self.method
    }
}

impl CBORTagged for EncryptedKey {
    fn cbor_tags() -> Vec<Tag> {
        vec![Tag::new(TAG_ENCRYPTED_KEY, "crypto-encrypted-key")]
    }
}

impl CBORTaggedEncodable for EncryptedKey {
    fn untagged_cbor(&self) -> CBOR {
        vec![
            CBOR::from(self.method.discriminator()),
            self.method.params_cbor(),
            CBOR::from(self.nonce),
            CBOR::to_byte_string(&self.ciphertext),
        ]
        .into()
    }
}

impl CBORTaggedDecodable for EncryptedKey {
    fn from_untagged_cbor(cbor: &CBOR) -> dcbor::Result<Self> {
        let items: Vec<CBOR> = match cbor.as_case() {
            CBORCase::Array(items) => items.clone(),
            _ => return Err(dcbor::Error::WrongType),
        };
        if items.len() != 4 {
            return Err(dcbor::Error::WrongType);
        }
        let discriminator: u8 = items[0].clone().try_into()?;
        let method = KdfMethod::from_discriminator_and_params(discriminator, &items[1])
            .map_err(|e| dcbor::Error::Custom(e.to_string()))?;
        let nonce: Nonce = items[2].clone().try_into()?;
        let ciphertext: Vec<u8> = items[3].clone().try_into()?;
        Ok(Self { method, nonce, ciphertext })
    }
}

impl From<EncryptedKey> for CBOR {
    fn from(value: EncryptedKey) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for EncryptedKey {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(&cbor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pbkdf2_lock_unlock_round_trip() {
        let content_key = SymmetricKey::new_random();
        let method = KdfMethod::Pbkdf2(Pbkdf2Params::new(b"salt".to_vec(), 1000));
        let locked = EncryptedKey::lock(method, b"hunter2", &content_key).unwrap();
        let unlocked = locked.unlock(b"hunter2").unwrap();
        assert_eq!(unlocked, content_key);
    }

    #[test]
    fn wrong_secret_fails() {
        let content_key = SymmetricKey::new_random();
        let method = KdfMethod::Pbkdf2(Pbkdf2Params::new(b"salt".to_vec(), 1000));
        let locked = EncryptedKey::lock(method, b"hunter2", &content_key).unwrap();
        assert!(locked.unlock(b"wrong").is_err());
    }

    #[test]
    fn cbor_round_trip_preserves_params() {
        let content_key = SymmetricKey::new_random();
        let method = KdfMethod::Scrypt(ScryptKdfParams::new(b"salt".to_vec(), 10, 8, 1));
        let locked = EncryptedKey::lock(method, b"hunter2", &content_key).unwrap();
        let cbor: CBOR = locked.clone().into();
        let parsed: EncryptedKey = cbor.try_into().unwrap();
        assert_eq!(parsed, locked);
        assert_eq!(parsed.unlock(b"hunter2").unwrap(), content_key);
    }
}
