//! X3DH initial key agreement: combines up to four Diffie-Hellman outputs
//! into one root key, sender chain key, and post-quantum-rekey init key.

use crate::constants::HKDF_INFO_ROOT;
use crate::error::{Error, Result};

/// The triad X3DH hands off to a fresh ratchet session.
pub struct X3dhOutput {
    pub root_key: [u8; 32],
    pub sender_chain_key: [u8; 32],
    pub pqr_init_key: [u8; 32],
    pub session_version: u8,
}

fn dh(our_private: &[u8; 32], their_public: &[u8; 32]) -> Result<[u8; 32]> {
    Ok(bc_crypto::x25519_shared_secret(our_private, their_public)?)
}

fn derive(secrets: &[u8], kyber_shared_secret: Option<&[u8]>) -> Result<X3dhOutput> {
    let mut ikm = vec![0xffu8; 32];
    ikm.extend_from_slice(secrets);
    let session_version = if let Some(kyber) = kyber_shared_secret {
        ikm.extend_from_slice(kyber);
        4
    } else {
        3
    };
    let okm = bc_crypto::hkdf_sha256(&[0u8; 32], &ikm, HKDF_INFO_ROOT, 96)?;
    let mut root_key = [0u8; 32];
    let mut sender_chain_key = [0u8; 32];
    let mut pqr_init_key = [0u8; 32];
    root_key.copy_from_slice(&okm[0..32]);
    sender_chain_key.copy_from_slice(&okm[32..64]);
    pqr_init_key.copy_from_slice(&okm[64..96]);
    Ok(X3dhOutput { root_key, sender_chain_key, pqr_init_key, session_version })
}

/// Alice's side: she has just generated a fresh base (ephemeral) keypair
/// and is about to send the first message.
pub struct AliceParams<'a> {
    pub our_identity_private: &'a [u8; 32],
    pub our_base_private: &'a [u8; 32],
    pub our_one_time_prekey_private: Option<&'a [u8; 32]>,
    pub their_identity_public: &'a [u8; 32],
    pub their_signed_prekey_public: &'a [u8; 32],
    pub their_one_time_prekey_public: Option<&'a [u8; 32]>,
    pub kyber_shared_secret: Option<&'a [u8]>,
}

pub fn alice_init(params: &AliceParams<'_>) -> Result<X3dhOutput> {
    for key in [
        params.their_identity_public,
        params.their_signed_prekey_public,
    ] {
        bc_crypto::x25519_validate_public_key(key).map_err(Error::Crypto)?;
    }
    if let Some(key) = params.their_one_time_prekey_public {
        bc_crypto::x25519_validate_public_key(key).map_err(Error::Crypto)?;
    }

    let mut secrets = Vec::with_capacity(128);
    secrets.extend_from_slice(&dh(params.our_identity_private, params.their_signed_prekey_public)?);
    secrets.extend_from_slice(&dh(params.our_base_private, params.their_identity_public)?);
    secrets.extend_from_slice(&dh(params.our_base_private, params.their_signed_prekey_public)?);
    if let Some(their_otk) = params.their_one_time_prekey_public {
        secrets.extend_from_slice(&dh(params.our_base_private, their_otk)?);
    }
    let _ = params.our_one_time_prekey_private; // unused on Alice's side of X3DH
    derive(&secrets, params.kyber_shared_secret)
}

/// Bob's side: mirrors Alice's DH pairings with the roles of identity/base
/// keys swapped, and seeds the session's sender chain from a fresh ratchet
/// keypair of his own rather than reusing any prekey.
pub struct BobParams<'a> {
    pub our_identity_private: &'a [u8; 32],
    pub our_signed_prekey_private: &'a [u8; 32],
    pub our_one_time_prekey_private: Option<&'a [u8; 32]>,
    pub their_identity_public: &'a [u8; 32],
    pub their_base_public: &'a [u8; 32],
    pub kyber_shared_secret: Option<&'a [u8]>,
}

pub fn bob_init(params: &BobParams<'_>) -> Result<X3dhOutput> {
    for key in [params.their_identity_public, params.their_base_public] {
        bc_crypto::x25519_validate_public_key(key).map_err(Error::Crypto)?;
    }

    let mut secrets = Vec::with_capacity(128);
    secrets.extend_from_slice(&dh(params.our_signed_prekey_private, params.their_identity_public)?);
    secrets.extend_from_slice(&dh(params.our_identity_private, params.their_base_public)?);
    secrets.extend_from_slice(&dh(params.our_signed_prekey_private, params.their_base_public)?);
    if let Some(our_otk) = params.our_one_time_prekey_private {
        secrets.extend_from_slice(&dh(our_otk, params.their_base_public)?);
    }
    derive(&secrets, params.kyber_shared_secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_crypto::{RandomNumberGenerator, TestRandomNumberGenerator};

    fn keypair(rng: &mut impl RandomNumberGenerator) -> ([u8; 32], [u8; 32]) {
        let private: [u8; 32] = rng.random_array();
        let public = bc_crypto::x25519_public_key(&private);
        (private, public)
    }

    #[test]
    fn alice_and_bob_agree_without_one_time_prekey() {
        let mut rng = TestRandomNumberGenerator::new_with_seed(1);
        let (alice_identity_priv, alice_identity_pub) = keypair(&mut rng);
        let (alice_base_priv, alice_base_pub) = keypair(&mut rng);
        let (bob_identity_priv, bob_identity_pub) = keypair(&mut rng);
        let (bob_spk_priv, bob_spk_pub) = keypair(&mut rng);

        let alice_out = alice_init(&AliceParams {
            our_identity_private: &alice_identity_priv,
            our_base_private: &alice_base_priv,
            our_one_time_prekey_private: None,
            their_identity_public: &bob_identity_pub,
            their_signed_prekey_public: &bob_spk_pub,
            their_one_time_prekey_public: None,
            kyber_shared_secret: None,
        })
        .unwrap();

        let bob_out = bob_init(&BobParams {
            our_identity_private: &bob_identity_priv,
            our_signed_prekey_private: &bob_spk_priv,
            our_one_time_prekey_private: None,
            their_identity_public: &alice_identity_pub,
            their_base_public: &alice_base_pub,
            kyber_shared_secret: None,
        })
        .unwrap();

        assert_eq!(alice_out.root_key, bob_out.root_key);
        assert_eq!(alice_out.sender_chain_key, bob_out.sender_chain_key);
        assert_eq!(alice_out.pqr_init_key, bob_out.pqr_init_key);
        assert_eq!(alice_out.session_version, 3);
        assert_eq!(bob_out.session_version, 3);
    }

    #[test]
    fn kyber_secret_bumps_session_version_to_four() {
        let mut rng = TestRandomNumberGenerator::new_with_seed(2);
        let (alice_identity_priv, alice_identity_pub) = keypair(&mut rng);
        let (alice_base_priv, alice_base_pub) = keypair(&mut rng);
        let (bob_identity_priv, bob_identity_pub) = keypair(&mut rng);
        let (bob_spk_priv, bob_spk_pub) = keypair(&mut rng);
        let kyber_secret = vec![7u8; 32];

        let alice_out = alice_init(&AliceParams {
            our_identity_private: &alice_identity_priv,
            our_base_private: &alice_base_priv,
            our_one_time_prekey_private: None,
            their_identity_public: &bob_identity_pub,
            their_signed_prekey_public: &bob_spk_pub,
            their_one_time_prekey_public: None,
            kyber_shared_secret: Some(&kyber_secret),
        })
        .unwrap();
        let bob_out = bob_init(&BobParams {
            our_identity_private: &bob_identity_priv,
            our_signed_prekey_private: &bob_spk_priv,
            our_one_time_prekey_private: None,
            their_identity_public: &alice_identity_pub,
            their_base_public: &alice_base_pub,
            kyber_shared_secret: Some(&kyber_secret),
        })
        .unwrap();
        assert_eq!(alice_out.session_version, 4);
        assert_eq!(alice_out.root_key, bob_out.root_key);
    }
}
