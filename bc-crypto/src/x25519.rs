use crate::Error;

pub const KEY_SIZE: usize = 32;

/// The points of small order on Curve25519 (and its twist), whose
/// u-coordinates an implementation must reject before performing a DH
/// computation — accepting them silently breaks contributory behavior for
/// protocols that rely on it.
fn low_order_points() -> [[u8; 32]; 7] {
    [
        [0u8; 32],
        { let mut p = [0u8; 32]; p[0] = 1; p },
        hex_literal::hex!("e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800"),
        hex_literal::hex!("5f9c95bca3508c24b1d0b1559c83ef5b04445cc4581c8e86d8224eddd09f1157"),
        hex_literal::hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
        hex_literal::hex!("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
        hex_literal::hex!("cdeb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b880"),
    ]
}

/// Rejects the known torsion-subgroup low-order points and non-canonical
/// u-coordinates (the high bit of the final byte set, per RFC 7748's
/// decodeUCoordinate masking requirement being relied on for canonicity
/// rather than silent acceptance).
pub fn validate_public_key(bytes: &[u8; KEY_SIZE]) -> crate::Result<()> {
    if bytes[31] & 0x80 != 0 {
        return Err(Error::InvalidPublicKey);
    }
    if low_order_points().iter().any(|p| p == bytes) {
        return Err(Error::InvalidPublicKey);
    }
    Ok(())
}

/// Raw X25519 scalar multiplication. Rejects a validated-but-all-zero
/// shared secret, which can only arise from a low-order input that slipped
/// past `validate_public_key` (defense in depth).
pub fn x25519_shared_secret(
    our_private: &[u8; KEY_SIZE],
    their_public: &[u8; KEY_SIZE],
) -> crate::Result<[u8; KEY_SIZE]> {
    validate_public_key(their_public)?;
    let shared = x25519_dalek::x25519(*our_private, *their_public);
    if shared == [0u8; KEY_SIZE] {
        return Err(Error::AllZeroDh);
    }
    Ok(shared)
}

pub fn x25519_public_key(private: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    x25519_dalek::x25519(*private, x25519_dalek::X25519_BASEPOINT_BYTES)
}
