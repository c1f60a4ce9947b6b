use argon2::Argon2;
use pbkdf2::pbkdf2_hmac;
use scrypt::Params as ScryptParams;
use sha2::Sha256;

use crate::Error;

/// Parameters for PBKDF2-HMAC-SHA-256, stored alongside the derived key so
/// that `unlock` can reproduce the same derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pbkdf2Params {
    pub salt: Vec<u8>,
    pub iterations: u32,
}

impl Pbkdf2Params {
    pub fn new(salt: Vec<u8>, iterations: u32) -> Self {
        Self { salt, iterations }
    }
}

pub fn pbkdf2_sha256(secret: &[u8], params: &Pbkdf2Params, key_len: usize) -> Vec<u8> {
    let mut out = vec![0u8; key_len];
    pbkdf2_hmac::<Sha256>(secret, &params.salt, params.iterations, &mut out);
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScryptKdfParams {
    pub salt: Vec<u8>,
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl ScryptKdfParams {
    pub fn new(salt: Vec<u8>, log_n: u8, r: u32, p: u32) -> Self {
        Self { salt, log_n, r, p }
    }
}

pub fn scrypt_derive(secret: &[u8], params: &ScryptKdfParams, key_len: usize) -> crate::Result<Vec<u8>> {
    let scrypt_params = ScryptParams::new(params.log_n, params.r, params.p, key_len)
        .map_err(|e| Error::Kdf(e.to_string()))?;
    let mut out = vec![0u8; key_len];
    scrypt::scrypt(secret, &params.salt, &scrypt_params, &mut out)
        .map_err(|e| Error::Kdf(e.to_string()))?;
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2idParams {
    pub salt: Vec<u8>,
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Argon2idParams {
    pub fn new(salt: Vec<u8>, memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self { salt, memory_kib, iterations, parallelism }
    }
}

pub fn argon2id_derive(
    secret: &[u8],
    params: &Argon2idParams,
    key_len: usize,
) -> crate::Result<Vec<u8>> {
    let argon2_params = argon2::Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(key_len),
    )
    .map_err(|e| Error::Kdf(e.to_string()))?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, argon2_params);
    let mut out = vec![0u8; key_len];
    argon2
        .hash_password_into(secret, &params.salt, &mut out)
        .map_err(|e| Error::Kdf(e.to_string()))?;
    Ok(out)
}
